//! Per-template render functions, dispatched on `TemplateKind`.
//!
//! A render function reads values only through `RenderContext::fields` and
//! reads every field it uses before deciding whether to show it, so a dry
//! render sees each field id the template depends on.

mod commercial;
mod common;
mod contracts;
mod records;

use super::TemplateKind;
use crate::composer::RenderContext;
use crate::content::Document;

pub fn render(ctx: &RenderContext) -> Document {
    match ctx.template.kind {
        TemplateKind::Quotation => commercial::quotation(ctx),
        TemplateKind::Invoice => commercial::invoice(ctx),
        TemplateKind::Sales => commercial::sales(ctx),
        TemplateKind::Rental => contracts::rental(ctx),
        TemplateKind::Service => contracts::service(ctx),
        TemplateKind::Labor => contracts::labor(ctx),
        TemplateKind::PowerOfAttorney => contracts::power_of_attorney(ctx),
        TemplateKind::Liquidation => records::liquidation(ctx),
        TemplateKind::Handover => records::handover(ctx),
        TemplateKind::Receipt => records::receipt(ctx),
    }
}
