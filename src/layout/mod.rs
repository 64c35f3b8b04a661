pub(crate) mod align;
pub(crate) mod animated;
pub(crate) mod boxes;
pub(crate) mod constraints;
pub(crate) mod delay;
pub(crate) mod flex;
pub(crate) mod grid;
pub(crate) mod media;
pub(crate) mod node;
pub(crate) mod padding;
pub(crate) mod sequence;
pub(crate) mod stack;
pub(crate) mod translate;

#[cfg(test)]
#[path = "../../tests/unit/layout/support.rs"]
pub(crate) mod test_support;
