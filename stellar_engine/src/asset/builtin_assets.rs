/// Built-in asset types: raw text and raw bytes.

use crate::error::Result;
use super::asset::{Asset, LoadContext};
use super::asset_factory::AssetFactory;

/// UTF-8 text file (empty string when created as a default)
#[derive(Debug, Clone, PartialEq)]
pub struct TextAsset {
    text: String,
}

impl TextAsset {
    fn empty() -> Self {
        Self { text: String::new() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl Asset for TextAsset {
    fn load(&mut self, ctx: &LoadContext<'_>) -> Result<()> {
        if !ctx.is_default() {
            self.text = ctx.read_to_string()?;
        }
        Ok(())
    }
}

/// Binary file (empty when created as a default)
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryAsset {
    bytes: Vec<u8>,
}

impl BinaryAsset {
    fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Asset for BinaryAsset {
    fn load(&mut self, ctx: &LoadContext<'_>) -> Result<()> {
        if !ctx.is_default() {
            self.bytes = ctx.read_bytes()?;
        }
        Ok(())
    }
}

/// Register the constructors of all built-in asset types
pub fn register_builtin_assets(factory: &mut AssetFactory) {
    factory.register(TextAsset::empty);
    factory.register(BinaryAsset::empty);
}
