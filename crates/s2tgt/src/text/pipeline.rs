use core::fmt;
use std::sync::Arc;

use crate::text::{IdentityTransform, TextTransform};

/// An ordered sequence of [`TextTransform`] stages.
///
/// An empty pipeline is the identity.
#[derive(Clone, Default)]
pub struct TextPipeline {
    stages: Vec<Arc<dyn TextTransform>>,
}

impl fmt::Debug for TextPipeline {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TextPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl TextPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Append a stage.
    pub fn push<X>(
        &mut self,
        stage: X,
    ) where
        X: TextTransform + 'static,
    {
        self.stages.push(Arc::new(stage));
    }

    /// Append a stage and return the pipeline.
    pub fn with_stage<X>(
        mut self,
        stage: X,
    ) -> Self
    where
        X: TextTransform + 'static,
    {
        self.push(stage);
        self
    }

    /// Append a shared stage and return the pipeline.
    pub fn with_shared_stage(
        mut self,
        stage: Arc<dyn TextTransform>,
    ) -> Self {
        self.stages.push(stage);
        self
    }

    /// Convert into a shared transform.
    pub fn into_shared(self) -> Arc<dyn TextTransform> {
        if self.is_empty() {
            Arc::new(IdentityTransform)
        } else {
            Arc::new(self)
        }
    }
}

impl TextTransform for TextPipeline {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        let mut buf = text.to_string();
        for stage in &self.stages {
            buf = stage.apply(&buf);
        }
        buf
    }
}
