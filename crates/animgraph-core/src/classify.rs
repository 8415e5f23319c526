//! Type tag classification.
//!
//! Every object in an AnimGraph document may carry a `$type` tag. The extractor only ever asks one
//! question of a tag: is it a graph node, a link wrapper, or plain structure? The answer comes from
//! two closed allow-lists. Matching is exact and case-sensitive; anything not listed is plain
//! structure, even if it looks node-like.
//!
//! The lists are versioned data. They are not exhaustive of real-world schemas; extending them is
//! a data change (or a custom [`TypeCatalog`]), never a traversal change.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Namespace prefix carried by every node payload tag.
pub const NODE_TYPE_PREFIX: &str = "animAnimNode_";

/// Payload tags that make an object a graph node.
pub const NODE_TYPES: &[&str] = &[
    "animAnimNode_AddSnapToTerrainIkRequest",
    "animAnimNode_AimConstraint",
    "animAnimNode_ApplyCorrectivePoseRbf",
    "animAnimNode_Blend2",
    "animAnimNode_BlendAdditive",
    "animAnimNode_BlendByMaskDynamic",
    "animAnimNode_BlendFromPose",
    "animAnimNode_BlendMultiple",
    "animAnimNode_BlendOverride",
    "animAnimNode_BoolConstant",
    "animAnimNode_BoolInput",
    "animAnimNode_BoolJoin",
    "animAnimNode_BoolToFloatConverter",
    "animAnimNode_BoolVariable",
    "animAnimNode_ConditionalSegmentBegin",
    "animAnimNode_ConditionalSegmentEnd",
    "animAnimNode_FacialMixerSlot",
    "animAnimNode_FacialSharedMetaPose",
    "animAnimNode_FloatClamp",
    "animAnimNode_FloatConstant",
    "animAnimNode_FloatInput",
    "animAnimNode_FloatMathOp",
    "animAnimNode_FloatRandom",
    "animAnimNode_FloatToBoolConverter",
    "animAnimNode_FloatVariable",
    "animAnimNode_ForegroundSegmentBegin",
    "animAnimNode_ForegroundSegmentEnd",
    "animAnimNode_GraphSlot",
    "animAnimNode_IdentityPoseTerminator",
    "animAnimNode_IntConstant",
    "animAnimNode_IntInput",
    "animAnimNode_IntVariable",
    "animAnimNode_LookAt",
    "animAnimNode_MixerSlot",
    "animAnimNode_Output",
    "animAnimNode_QuaternionInput",
    "animAnimNode_ReferencePoseTerminator",
    "animAnimNode_Root",
    "animAnimNode_SharedMetaPose",
    "animAnimNode_SkAnim",
    "animAnimNode_SkFullAnim",
    "animAnimNode_SkPhaseAnim",
    "animAnimNode_SkPhaseSlotWithIkAnim",
    "animAnimNode_State",
    "animAnimNode_StateMachine",
    "animAnimNode_Switch",
    "animAnimNode_TPoseTerminator",
    "animAnimNode_TwoBoneIk",
    "animAnimNode_VectorConstant",
    "animAnimNode_VectorInput",
    "animAnimNode_VectorVariable",
];

/// Wrapper tags whose `node` field references another graph node.
pub const LINK_TYPES: &[&str] = &[
    "animBoolLink",
    "animFloatLink",
    "animIntLink",
    "animPoseLink",
    "animQuaternionLink",
    "animTransformLink",
    "animVectorLink",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// A graph node payload.
    Node,
    /// A link wrapper: its `node` field points at the node feeding the enclosing socket.
    Link,
    /// Anything else; traversed as plain structure.
    Plain,
}

/// An owned pair of tag sets.
///
/// The extractor is parameterized over a catalog so callers can swap the taxonomy without
/// touching traversal logic. [`TypeCatalog::builtin`] mirrors [`NODE_TYPES`] / [`LINK_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    node_types: FxHashSet<String>,
    link_types: FxHashSet<String>,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeCatalog {
    pub fn builtin() -> Self {
        Self::new(NODE_TYPES.iter().copied(), LINK_TYPES.iter().copied())
    }

    pub fn new<N, L>(node_types: N, link_types: L) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            node_types: node_types.into_iter().map(Into::into).collect(),
            link_types: link_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_node_type(mut self, tag: impl Into<String>) -> Self {
        self.node_types.insert(tag.into());
        self
    }

    pub fn with_link_type(mut self, tag: impl Into<String>) -> Self {
        self.link_types.insert(tag.into());
        self
    }

    /// Node membership wins when a tag is listed in both sets.
    pub fn classify(&self, tag: &str) -> TypeClass {
        if self.node_types.contains(tag) {
            TypeClass::Node
        } else if self.link_types.contains(tag) {
            TypeClass::Link
        } else {
            TypeClass::Plain
        }
    }

    pub fn is_node(&self, tag: &str) -> bool {
        self.classify(tag) == TypeClass::Node
    }

    pub fn is_link(&self, tag: &str) -> bool {
        self.classify(tag) == TypeClass::Link
    }

    pub fn node_type_count(&self) -> usize {
        self.node_types.len()
    }

    pub fn link_type_count(&self) -> usize {
        self.link_types.len()
    }
}

fn builtin() -> &'static TypeCatalog {
    static CATALOG: OnceLock<TypeCatalog> = OnceLock::new();
    CATALOG.get_or_init(TypeCatalog::builtin)
}

/// Classifies `tag` against the built-in allow-lists.
pub fn classify(tag: &str) -> TypeClass {
    builtin().classify(tag)
}

pub fn is_node(tag: &str) -> bool {
    builtin().is_node(tag)
}

pub fn is_link(tag: &str) -> bool {
    builtin().is_link(tag)
}

/// Strips the [`NODE_TYPE_PREFIX`] namespace for display (`animAnimNode_Blend2` -> `Blend2`).
pub fn display_type(tag: &str) -> &str {
    tag.strip_prefix(NODE_TYPE_PREFIX).unwrap_or(tag)
}
