use super::export::Export;
use crate::control::table::Surface;
use crate::Probability;
use serde::Serialize;

/// the greedy value surface of one controller at one point of training
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    controller: String,
    label: String,
    episodes: usize,
    lambda: Option<Probability>,
    surface: Surface,
}

impl Snapshot {
    pub fn new(
        controller: String,
        label: String,
        episodes: usize,
        lambda: Option<Probability>,
        surface: Surface,
    ) -> Self {
        Self {
            controller,
            label,
            episodes,
            lambda,
            surface,
        }
    }
    pub fn surface(&self) -> &Surface {
        &self.surface
    }
    pub fn episodes(&self) -> usize {
        self.episodes
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Export for Snapshot {
    fn directory(&self) -> String {
        self.controller.clone()
    }
    fn name(&self) -> String {
        format!("surface_{}", self.label)
    }
}

impl Export for crate::training::curve::Sweep {
    fn directory(&self) -> String {
        self.name().to_string()
    }
    fn name(&self) -> String {
        "errors".to_string()
    }
}
