use std::sync::Arc;

use s2tgt::{
    TargetOptions,
    text::{Lowercase, PunctuationSplitter, TextPipeline, TextTransform, WhitespaceNormalizer},
    vocab::LangTagTemplate,
};

/// Target construction arg group.
#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    /// JSON target options file; flags below override it.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// Prepend the target language tag.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    prepend_lang_tag: bool,

    /// Language tag template, with one "{}" placeholder.
    #[arg(long, default_value = None)]
    lang_tag_template: Option<String>,

    /// Encode batches in parallel.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    parallel: bool,

    /// Lowercase text before encoding.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    lowercase: bool,

    /// Split punctuation into separate symbols before encoding.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    split_punctuation: bool,
}

impl TargetArgs {
    /// Build the effective [`TargetOptions`].
    pub fn options(&self) -> Result<TargetOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => TargetOptions::load_json_path(path)?,
            None => TargetOptions::default(),
        };
        if self.prepend_lang_tag {
            options.set_prepend_lang_tag(true);
        }
        if let Some(template) = &self.lang_tag_template {
            options.set_lang_tag_template(LangTagTemplate::new(template)?);
        }
        if self.parallel {
            options.set_parallel(true);
        }
        log::debug!("target options: {options:?}");
        Ok(options)
    }

    /// Build the pre-tokenization pipeline.
    pub fn transform(&self) -> Result<Arc<dyn TextTransform>, Box<dyn std::error::Error>> {
        let mut pipeline = TextPipeline::new();
        if self.lowercase {
            pipeline.push(Lowercase);
        }
        if self.split_punctuation {
            pipeline.push(PunctuationSplitter::new()?);
        }
        pipeline.push(WhitespaceNormalizer);
        Ok(pipeline.into_shared())
    }
}
