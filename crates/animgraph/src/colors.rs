//! Header colors per node type.

pub const DEFAULT_COLOR: &str = "#7f8c8d";

const COLOR_MAP: &[(&str, &str)] = &[
    ("Root", "#e74c3c"),
    ("Output", "#e67e22"),
    ("SkAnim", "#3498db"),
    ("MixerSlot", "#9b59b6"),
    ("SharedMetaPose", "#1abc9c"),
    ("FacialSharedMetaPose", "#16a085"),
    ("FacialMixerSlot", "#8e44ad"),
    ("ReferencePoseTerminator", "#95a5a6"),
    ("IdentityPoseTerminator", "#7f8c8d"),
    ("StateMachine", "#f39c12"),
    ("State", "#f1c40f"),
    ("BlendFromPose", "#2ecc71"),
    ("BlendAdditive", "#27ae60"),
    ("BlendOverride", "#2980b9"),
    ("FloatConstant", "#e74c3c"),
    ("FloatInput", "#c0392b"),
    ("FloatRandom", "#d35400"),
    ("BoolConstant", "#8e44ad"),
    ("BoolInput", "#9b59b6"),
    ("BoolToFloatConverter", "#a569bd"),
    ("IntConstant", "#d35400"),
    ("Blend2", "#27ae60"),
    ("Switch", "#34495e"),
    ("GraphSlot", "#2c3e50"),
];

/// Color for a node type without its namespace prefix; [`DEFAULT_COLOR`] when unknown.
pub fn color_for(node_type: &str) -> &'static str {
    COLOR_MAP
        .iter()
        .find(|(ty, _)| *ty == node_type)
        .map_or(DEFAULT_COLOR, |&(_, color)| color)
}
