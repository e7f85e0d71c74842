//! Target Options
//!
//! Options for building a [`crate::targets::TargetEncoder`]
//! or a [`crate::targets::AuxiliaryBatchAssembler`].

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{errors::S2tgtResult, vocab::LangTagTemplate};

/// Options for configuring target construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOptions {
    /// Prepend the target language tag to every target.
    pub prepend_lang_tag: bool,

    /// The template used to form language tags.
    pub lang_tag_template: LangTagTemplate,

    /// Should batch encoding be threaded?
    ///
    /// Only honored when the ``rayon`` feature is enabled.
    pub parallel: bool,
}

impl TargetOptions {
    /// Parse options from a JSON string.
    pub fn from_json_str(json: &str) -> S2tgtResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn load_json_path<P: AsRef<Path>>(path: P) -> S2tgtResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Gets the configured lang tag prepending.
    pub fn prepend_lang_tag(&self) -> bool {
        self.prepend_lang_tag
    }

    /// Sets the configured lang tag prepending.
    pub fn set_prepend_lang_tag(
        &mut self,
        prepend_lang_tag: bool,
    ) {
        self.prepend_lang_tag = prepend_lang_tag;
    }

    /// Sets the configured lang tag prepending and returns the options.
    pub fn with_prepend_lang_tag(
        mut self,
        prepend_lang_tag: bool,
    ) -> Self {
        self.set_prepend_lang_tag(prepend_lang_tag);
        self
    }

    /// Gets the configured lang tag template.
    pub fn lang_tag_template(&self) -> &LangTagTemplate {
        &self.lang_tag_template
    }

    /// Sets the configured lang tag template.
    pub fn set_lang_tag_template(
        &mut self,
        template: LangTagTemplate,
    ) {
        self.lang_tag_template = template;
    }

    /// Sets the configured lang tag template and returns the options.
    pub fn with_lang_tag_template(
        mut self,
        template: LangTagTemplate,
    ) -> Self {
        self.set_lang_tag_template(template);
        self
    }

    /// The effective lang tag template; `None` when prepending is disabled.
    pub fn effective_lang_tag(&self) -> Option<&LangTagTemplate> {
        self.prepend_lang_tag.then_some(&self.lang_tag_template)
    }

    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value and returns the options.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}
