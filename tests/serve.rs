use base64::Engine;
use owlwing::{
    server::{Command, Session, Status},
    views::Tab,
    VizConfig,
};
use pretty_assertions::assert_eq;

#[test]
fn test_session_round_trip() {
    let mut session = Session::new(VizConfig::default());

    let response = session
        .handle(&Command::SelectTab {
            tab: Tab::Separation,
        })
        .unwrap();
    assert_eq!(response.tab, Tab::Separation);
    assert_eq!(response.angles, vec![0.0, 1.5, 3.0, 4.5, 6.0, 7.5, 9.0]);
    assert_eq!((response.width, response.height), (600, 320));

    let response = session.handle(&Command::SelectAngle { degrees: 9.0 }).unwrap();
    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.angle, 9.0);
    assert_eq!(response.notes.len(), 3);

    let png = base64::engine::general_purpose::STANDARD
        .decode(&response.frame)
        .unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn test_non_finite_angle_rejected() {
    let mut session = Session::new(VizConfig::default());
    assert!(session
        .handle(&Command::SelectAngle { degrees: f64::NAN })
        .is_err());
}

#[test]
fn test_stdin_protocol() {
    let mut session = Session::new(VizConfig::default());
    let input = "{\"SelectTab\":{\"tab\":\"LiftDrag\"}}\n{\"Bogus\":1}\n\"Render\"\n\"Close\"\n";
    let mut output = Vec::new();
    session.run(input.as_bytes(), &mut output).unwrap();

    let statuses: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["status"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(statuses, vec!["ok", "error", "ok", "closed"]);
}
