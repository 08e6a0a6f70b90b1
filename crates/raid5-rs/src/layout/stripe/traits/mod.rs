//! Trait seams shared by stripe layouts.

pub mod restore;
