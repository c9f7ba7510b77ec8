/// Integration test for the substitution and P-box pipeline
///
/// Tests the following scenarios:
/// 1. The full classroom flow, substitution feeding all three boxes
/// 2. Per-box failure independence on one shared input
/// 3. Tables supplied as configuration values instead of constructors
use permbox::demo;
use permbox::{substitute, PBox, SubstitutionTable, INPUT_TOO_SHORT};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn classroom_flow_end_to_end() {
    init_logging();
    let report = demo::process("245AB");
    assert_eq!(report.straight, "BPMAJ");
    assert_eq!(report.compression, "AJB");
    assert_eq!(report.expansion, "MJPABPJ");
    assert_eq!(
        report.to_string(),
        "SP-BOX: BPMAJ\nCP-BOX: AJB\nEP-BOX: MJPABPJ"
    );
}

#[test]
fn one_failing_box_leaves_the_others_alone() {
    init_logging();
    let wide = PBox::new(vec![9, 0]);
    let narrow = PBox::new(vec![1, 0]);
    let input = "AB";
    assert_eq!(wide.apply(input), INPUT_TOO_SHORT);
    assert_eq!(narrow.apply(input), "BA");
}

#[test]
fn tables_load_as_configuration_values() {
    init_logging();
    let subst: SubstitutionTable =
        serde_json::from_str(r#"{"2": "M", "4": "J", "5": "P"}"#).expect("substitution table");
    let gather: PBox = serde_json::from_str("[3, 1, 4]").expect("compression table");

    let substituted = substitute("245AB", &subst);
    assert_eq!(substituted, "MJPAB");
    assert_eq!(gather.apply(&substituted), "AJB");
    assert_eq!(gather, demo::compression_pbox());
}
