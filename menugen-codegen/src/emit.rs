//! Rendering resolved candidates into the generated source file.

use crate::{
    GenerationConfig, ResolvedCandidate,
    builder::CodeBuilder,
    template::{HostTemplate, MenuEntry},
};

/// Renders the generated file through a [`HostTemplate`].
///
/// The output depends only on the resolved candidates and the config, so
/// regenerating from the same input yields byte-identical text.
pub struct Emitter<'t> {
    template: &'t dyn HostTemplate,
}

impl<'t> Emitter<'t> {
    pub fn new(template: &'t dyn HostTemplate) -> Self {
        Self { template }
    }

    /// Build the per-entry view the template renders.
    pub fn menu_entry(&self, resolved: &ResolvedCandidate, config: &GenerationConfig) -> MenuEntry {
        let ty = &resolved.candidate.ty;
        MenuEntry {
            ordinal: resolved.ordinal,
            menu_path: format!("{}{}", self.template.menu_root(), resolved.identifier),
            priority: resolved.candidate.menu.order.unwrap_or(config.order),
            type_name: ty.source_name(),
            qualified_name: ty.qualified_name(),
        }
    }

    pub fn emit(&self, entries: &[ResolvedCandidate], config: &GenerationConfig) -> String {
        let mut ordered: Vec<&ResolvedCandidate> = entries.iter().collect();
        ordered.sort_by_key(|resolved| resolved.ordinal);

        let t = self.template;
        let b = CodeBuilder::new(t.indent());
        let b = t.header(t.banner(b));
        let b = b.each(ordered, |b, resolved| {
            t.entry(b, &self.menu_entry(resolved, config)).blank()
        });
        t.footer(t.helper(b)).blank().build()
    }
}
