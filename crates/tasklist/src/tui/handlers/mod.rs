pub(super) mod edit;
pub(super) mod navigation;
