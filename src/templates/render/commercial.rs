//! Quotation, invoice and sales contract: the templates with priced rows.

use super::common::{
    clause_blocks, dated, party, party_signatures, priced_table, signature, BASIS_CIVIL_CODE,
    BASIS_COMMERCIAL_LAW, BASIS_MUTUAL_NEEDS,
};
use crate::composer::{format_money, FieldView, RenderContext, Totals};
use crate::content::{Article, Document, DocumentBuilder, Paragraph};

fn totals(ctx: &RenderContext) -> Totals {
    ctx.totals
        .clone()
        .unwrap_or_else(|| Totals::compute(ctx.items, None))
}

fn tax_label(ctx: &RenderContext, name: &str) -> String {
    let percent = ctx
        .template
        .line_items
        .as_ref()
        .and_then(|policy| policy.tax_rate())
        .map(|rate| rate.percent())
        .unwrap_or(0);
    format!("{} ({}%):", name, percent)
}

/// Seller header lines shared by quotation and invoice.
fn company_letterhead(fields: &FieldView) -> Vec<Paragraph> {
    vec![
        Paragraph::strong(fields.text("company_name")),
        Paragraph::plain(fields.text("company_address")),
        Paragraph::plain(format!(
            "ĐT: {} | MST: {}",
            fields.text("company_phone"),
            fields.text("company_tax")
        )),
    ]
}

pub(super) fn quotation(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;
    let totals = totals(ctx);
    let tax = totals.tax.unwrap_or_default();

    let table = priced_table(
        ctx.items,
        &totals,
        "Mô tả",
        "Đơn giá (VNĐ)",
        "Thành tiền (VNĐ)",
    )
    .total("Cộng:", format_money(totals.subtotal))
    .total(tax_label(ctx, "VAT"), format_money(tax))
    .grand_total("Tổng cộng:", format_money(totals.grand_total));

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .letterhead(company_letterhead(f))
        .heading("BÁO GIÁ")
        .doc_number(format!(
            "Số: {} - Ngày: {}",
            f.text_or("quote_number", "..."),
            f.text("quote_date")
        ))
        .paragraph(Paragraph::strong("Kính gửi:").text(format!(" {}", f.text("customer_name"))))
        .text(format!(
            "Địa chỉ: {} | ĐT: {}",
            f.text("customer_address"),
            f.text("customer_phone")
        ))
        .text(format!("Người liên hệ: {}", f.text("customer_contact")))
        .text("Chúng tôi trân trọng gửi đến Quý khách báo giá như sau:")
        .table(table)
        .paragraph(
            Paragraph::strong("Điều kiện thanh toán:")
                .text(format!(" {}", f.text("payment_terms"))),
        )
        .paragraph(
            Paragraph::strong("Hiệu lực báo giá:")
                .text(format!(" {} ngày", f.count_or("valid_days", 30))),
        )
        .blocks(clause_blocks(&ctx.clauses))
        .paragraph_if(
            f.optional("notes")
                .map(|notes| Paragraph::strong("Ghi chú:").text(format!(" {}", notes))),
        )
        .signatures(vec![
            signature("Bên A", f.text("company_name")),
            signature("Bên B", ""),
        ])
        .build()
}

pub(super) fn invoice(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;
    let totals = totals(ctx);
    let tax = totals.tax.unwrap_or_default();

    let table = priced_table(ctx.items, &totals, "Mô tả", "Đơn giá", "Thành tiền")
        .total("Cộng tiền hàng:", format_money(totals.subtotal))
        .total(tax_label(ctx, "Thuế GTGT"), format_money(tax))
        .grand_total("Tổng thanh toán:", format_money(totals.grand_total));

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .letterhead(company_letterhead(f))
        .heading("HÓA ĐƠN BÁN HÀNG")
        .doc_number(format!(
            "Số: {} - Ngày: {}",
            f.text_or("inv_number", "..."),
            f.text("inv_date")
        ))
        .paragraph(Paragraph::strong("Khách hàng:").text(format!(" {}", f.text("customer_name"))))
        .text(format!(
            "Địa chỉ: {} | MST: {} | ĐT: {}",
            f.text("customer_address"),
            f.text("customer_tax"),
            f.text("customer_phone")
        ))
        .text(format!("Hình thức thanh toán: {}", f.text("payment_method")))
        .table(table)
        .paragraph_if(f.optional("company_bank").map(|bank| {
            Paragraph::strong("Thông tin chuyển khoản:").text(format!(" {}", bank))
        }))
        .signatures(vec![signature("Người bán", ""), signature("Người mua", "")])
        .build()
}

pub(super) fn sales(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;
    let totals = totals(ctx);

    let goods = priced_table(ctx.items, &totals, "Tên hàng hóa", "Đơn giá", "Thành tiền")
        .grand_total("Tổng:", format_money(totals.grand_total));

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("HỢP ĐỒNG MUA BÁN HÀNG HÓA")
        .doc_number(dated(f))
        .basis(BASIS_CIVIL_CODE)
        .basis(BASIS_COMMERCIAL_LAW)
        .basis(BASIS_MUTUAL_NEEDS)
        .party(party(f, "a", "BÊN BÁN (Bên A):"))
        .party(party(f, "b", "BÊN MUA (Bên B):"))
        .article(Article::numbered(1, "Hàng hóa").table(goods))
        .article(
            Article::numbered(2, "Giao hàng")
                .line(Paragraph::plain(format!("Địa điểm: {}", f.text("delivery_address"))))
                .line(Paragraph::plain(format!("Thời hạn: {}", f.text("delivery_date")))),
        )
        .article(
            Article::numbered(3, "Thanh toán")
                .line(Paragraph::plain(format!("Hình thức: {}", f.text("payment_method")))),
        )
        .blocks(clause_blocks(&ctx.clauses))
        .signatures(party_signatures(f))
        .build()
}
