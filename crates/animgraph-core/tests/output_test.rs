use animgraph_core::{NodeRecord, OutputValue, ValueKind, extract, output_value};
use serde_json::{Map, Value, json};

fn record(ty: &str, fields: Value) -> NodeRecord {
    let raw_type = format!("animAnimNode_{ty}");
    let mut attributes = Map::new();
    attributes.insert("$type".to_string(), Value::String(raw_type.clone()));
    if let Value::Object(fields) = fields {
        attributes.extend(fields);
    }
    NodeRecord {
        id: "0".to_string(),
        type_tag: ty.to_string(),
        raw_type,
        attributes,
    }
}

fn described(kind: ValueKind, text: &str) -> OutputValue {
    OutputValue {
        kind,
        value: Value::String(text.to_string()),
    }
}

#[test]
fn constants_report_their_literal() {
    let v = output_value(&record("FloatConstant", json!({ "value": 0.75 })));
    assert_eq!(v.kind, ValueKind::Float);
    assert_eq!(v.value, json!(0.75));

    let v = output_value(&record("BoolConstant", json!({ "value": 1 })));
    assert_eq!(v.kind, ValueKind::Bool);
    assert_eq!(v.value, json!(1));

    let v = output_value(&record("IntConstant", json!({})));
    assert_eq!(v.kind, ValueKind::Int);
    assert_eq!(v.value, Value::Null);

    let v = output_value(&record(
        "VectorConstant",
        json!({ "value": { "X": 1, "Y": 0, "Z": 0, "W": 0 } }),
    ));
    assert_eq!(v.kind, ValueKind::Vector);
}

#[test]
fn named_nodes_unwrap_cname_values() {
    assert_eq!(
        output_value(&record(
            "FloatInput",
            json!({ "name": { "$type": "CName", "$value": "speed" } })
        )),
        described(ValueKind::Float, "Input: speed")
    );
    assert_eq!(
        output_value(&record("BoolInput", json!({ "name": "isCrouching" }))),
        described(ValueKind::Bool, "Input: isCrouching")
    );
    assert_eq!(
        output_value(&record(
            "SkAnim",
            json!({ "animation": { "$type": "CName", "$value": "walk_fwd" } })
        )),
        described(ValueKind::Pose, "Animation: walk_fwd")
    );
    assert_eq!(
        output_value(&record("FloatVariable", json!({}))),
        described(ValueKind::Float, "Variable: Unknown")
    );
    assert_eq!(
        output_value(&record("State", json!({ "name": "idle" }))),
        described(ValueKind::Pose, "State: idle")
    );
    assert_eq!(
        output_value(&record("StateMachine", json!({}))),
        described(ValueKind::Pose, "State Machine Output")
    );
}

#[test]
fn other_types_fall_back_to_their_kind() {
    assert_eq!(
        output_value(&record("BlendAdditive", json!({}))),
        described(ValueKind::Pose, "Pose Output")
    );
    assert_eq!(
        output_value(&record("FacialMixerSlot", json!({}))),
        described(ValueKind::Pose, "Pose Output")
    );
    assert_eq!(
        output_value(&record("FloatMathOp", json!({}))),
        described(ValueKind::Float, "Float Output")
    );
    assert_eq!(
        output_value(&record("BoolJoin", json!({}))),
        described(ValueKind::Bool, "Bool Output")
    );
    assert_eq!(
        output_value(&record("LookAt", json!({}))),
        described(ValueKind::Unknown, "Output")
    );
}

#[test]
fn connection_values_are_keyed_by_target_and_socket() {
    let doc = json!({
        "Data": { "RootChunk": { "nodesToInit": [
            {
                "HandleId": "1",
                "Data": {
                    "$type": "animAnimNode_Blend2",
                    "weightNode": {
                        "$type": "animFloatLink",
                        "node": {
                            "HandleId": "2",
                            "Data": { "$type": "animAnimNode_FloatConstant", "value": 0.3 }
                        }
                    },
                    "firstInputNode": {
                        "$type": "animPoseLink",
                        "node": {
                            "HandleId": "3",
                            "Data": { "$type": "animAnimNode_SkAnim", "animation": "run" }
                        }
                    }
                }
            }
        ] } }
    });

    let g = extract(&doc).unwrap();
    let values = g.connection_values();
    assert_eq!(
        values.keys().cloned().collect::<Vec<_>>(),
        vec!["1-weightNode", "1-firstInputNode"]
    );
    assert_eq!(values["1-weightNode"].value, json!(0.3));
    assert_eq!(
        values["1-firstInputNode"],
        described(ValueKind::Pose, "Animation: run")
    );
}

#[test]
fn output_values_serialize_with_a_type_field() {
    let v = described(ValueKind::Pose, "Pose Output");
    assert_eq!(
        serde_json::to_value(&v).unwrap(),
        json!({ "type": "pose", "value": "Pose Output" })
    );
}
