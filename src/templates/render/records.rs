//! Records and receipts: liquidation, handover and receipt.

use rust_decimal::Decimal;

use super::common::{
    dated, handover_table, party, party_signatures, signature, vnd, BASIS_CIVIL_CODE,
};
use crate::composer::{format_money, RenderContext};
use crate::content::{Article, Document, DocumentBuilder, Paragraph};

pub(super) fn liquidation(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;
    let contract_value = f.number("contract_value");
    let paid_amount = f.number("paid_amount");
    let remaining: Decimal = contract_value.saturating_sub(paid_amount);

    let settlement = Article::titled("Nội dung thanh lý")
        .line(Paragraph::plain("1. Giá trị hợp đồng: ").bold(vnd(format_money(contract_value))))
        .line(Paragraph::plain("2. Đã thanh toán: ").bold(vnd(format_money(paid_amount))))
        .line(Paragraph::plain("3. Còn lại: ").bold(vnd(format_money(remaining))))
        .line_if(
            f.optional("completion_note")
                .map(|note| Paragraph::plain(format!("4. Kết quả: {}", note))),
        )
        .line(Paragraph::plain(
            "Hai bên xác nhận đã hoàn thành đầy đủ nghĩa vụ theo hợp đồng và không còn khiếu nại gì.",
        ));

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("BIÊN BẢN THANH LÝ HỢP ĐỒNG")
        .doc_number(dated(f))
        .basis(BASIS_CIVIL_CODE)
        .paragraph(
            Paragraph::plain("Căn cứ Hợp đồng số ")
                .bold(f.text("contract_ref"))
                .text(format!(" ký ngày {};", f.text("contract_date"))),
        )
        .party(party(f, "a", "BÊN A:"))
        .party(party(f, "b", "BÊN B:"))
        .article(settlement)
        .signatures(party_signatures(f))
        .build()
}

pub(super) fn handover(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("BIÊN BẢN BÀN GIAO")
        .doc_number(dated(f))
        .basis(BASIS_CIVIL_CODE)
        .paragraph_if(
            f.optional("handover_reason")
                .map(|reason| Paragraph::plain(format!("Căn cứ: {}", reason))),
        )
        .party(party(f, "a", "BÊN GIAO:"))
        .party(party(f, "b", "BÊN NHẬN:"))
        .text(format!(
            "Địa điểm: {} | Ngày: {}",
            f.text("handover_location"),
            f.text("handover_date")
        ))
        .table(handover_table(ctx.items))
        .paragraph_if(
            f.optional("condition_note")
                .map(|note| Paragraph::strong("Ghi chú:").text(format!(" {}", note))),
        )
        .text("Bên giao xác nhận đã bàn giao và Bên nhận xác nhận đã nhận đầy đủ.")
        .signatures(party_signatures(f))
        .build()
}

pub(super) fn receipt(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("GIẤY BIÊN NHẬN")
        .doc_number(format!("Ngày {}", f.text("receipt_date")))
        .paragraph(
            Paragraph::plain("Căn cứ Bộ luật Dân sự số 91/2015/QH13 ngày 24/11/2015").note(),
        )
        .paragraph(Paragraph::plain("Tôi tên: ").bold(f.text("receiver_name")))
        .text(format!("CMND/CCCD: {}", f.text("receiver_id")))
        .paragraph(
            Paragraph::plain("Xác nhận đã nhận từ ông/bà: ")
                .bold(f.text("payer_name"))
                .text(format!(" (CMND/CCCD: {})", f.text("payer_id"))),
        )
        .paragraph(Paragraph::plain("Số tiền: ").bold(vnd(f.money("amount"))))
        .text("(Bằng chữ: ..............................................................................................)")
        .text(format!("Lý do: {}", f.text("reason")))
        .text("Giấy biên nhận này được lập thành 02 bản, mỗi bên giữ 01 bản.")
        .signatures(vec![
            signature("Người nhận", f.text("receiver_name")),
            signature("Người giao", f.text("payer_name")),
        ])
        .build()
}
