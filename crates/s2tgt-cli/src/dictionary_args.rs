use std::sync::Arc;

use s2tgt::vocab::{Dictionary, SpecialSymbols, io::load_dictionary_path};

/// Dictionary selection arg group.
#[derive(clap::Args, Debug)]
pub struct DictionaryArgs {
    /// Dictionary file, one "<symbol> <count>" per line.
    #[arg(long)]
    dict: String,

    /// Padding symbol.
    #[arg(long, default_value = "<pad>")]
    pad_symbol: String,

    /// End-of-sentence symbol.
    #[arg(long, default_value = "</s>")]
    eos_symbol: String,
}

impl DictionaryArgs {
    /// The special symbols to seed the dictionary with.
    pub fn specials(&self) -> SpecialSymbols {
        SpecialSymbols {
            pad: self.pad_symbol.clone(),
            eos: self.eos_symbol.clone(),
            ..Default::default()
        }
    }

    /// Load the dictionary.
    pub fn load_dictionary(&self) -> Result<Arc<Dictionary<u32>>, Box<dyn std::error::Error>> {
        Ok(load_dictionary_path(&self.dict, &self.specials())?.into())
    }
}
