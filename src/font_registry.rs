//! Font registry for the built-in Type1 faces
//!
//! Fonts are written into the PDF the first time a page uses them and then
//! referenced from every later page's resource dictionary.

use pdf_writer::writers::Resources;
use pdf_writer::{Name, Pdf, Ref};

use crate::font_metrics::StandardFont;
use crate::renderer::RefAllocator;

pub struct FontRegistry {
    /// Registration order is kept so resource dictionaries are stable.
    fonts: Vec<(StandardFont, Ref, Name<'static>)>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    pub fn get(&self, font: StandardFont) -> Option<(Ref, Name<'static>)> {
        self.fonts
            .iter()
            .find(|(registered, _, _)| *registered == font)
            .map(|(_, id, name)| (*id, *name))
    }

    /// Resource name for `font`, writing the font object on first use.
    pub fn get_or_builtin(
        &mut self,
        pdf: &mut Pdf,
        refs: &mut RefAllocator,
        font: StandardFont,
    ) -> Name<'static> {
        if let Some((_, name)) = self.get(font) {
            return name;
        }

        let resource_name = match font {
            StandardFont::Helvetica => Name(b"F1"),
            StandardFont::HelveticaBold => Name(b"F2"),
        };

        let font_id = refs.next_ref();
        pdf.type1_font(font_id)
            .base_font(Name(font.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        self.fonts.push((font, font_id, resource_name));

        resource_name
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Write all registered fonts into page Resources
    pub fn write_resources(&self, resources: &mut Resources<'_>) {
        if self.fonts.is_empty() {
            return;
        }
        let mut dict = resources.fonts();
        for (_, id, name) in &self.fonts {
            dict.pair(*name, *id);
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}
