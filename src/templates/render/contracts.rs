//! Two-party contracts: rental, service, labor and power of attorney.

use super::common::{
    clause_blocks, dated, party, party_signatures, vnd, BASIS_CIVIL_CODE, BASIS_COMMERCIAL_LAW,
    BASIS_MUTUAL_NEEDS,
};
use crate::composer::RenderContext;
use crate::content::{Article, Document, DocumentBuilder, Paragraph, Party};

/// Trailing "Điều khoản chung" article numbered after the selected clauses.
fn general_provisions(ctx: &RenderContext, lines: &[&str]) -> Article {
    let number = ctx
        .closing_article()
        .unwrap_or(ctx.clauses.len() as u32 + 1);
    lines
        .iter()
        .fold(Article::numbered(number, "Điều khoản chung"), |article, line| {
            article.line(Paragraph::plain(*line))
        })
}

pub(super) fn rental(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    let property = Article::numbered(1, "Tài sản cho thuê")
        .line(
            Paragraph::plain("Bên A đồng ý cho Bên B thuê tài sản tại: ")
                .bold(f.text("property_address")),
        )
        .line(Paragraph::plain(format!(
            "Diện tích: {} m²",
            f.measure("property_area")
        )))
        .line_if(
            f.optional("property_desc")
                .map(|desc| Paragraph::plain(format!("Mô tả: {}", desc))),
        );

    let term = Article::numbered(2, "Thời hạn thuê").line(Paragraph::plain(format!(
        "Từ ngày {} đến ngày {}.",
        f.text("rent_start"),
        f.text("rent_end")
    )));

    let payment = Article::numbered(3, "Giá thuê và thanh toán")
        .line(Paragraph::plain("Giá thuê: ").bold(format!("{}/tháng", vnd(f.money("rent_amount")))))
        .line(Paragraph::plain("Tiền đặt cọc: ").bold(vnd(f.money("deposit"))))
        .line(Paragraph::plain(format!(
            "Thanh toán vào ngày {} hàng tháng bằng hình thức {}.",
            f.count_or("payment_day", 5),
            f.text_or("payment_method", "chuyển khoản")
        )))
        .line(Paragraph::plain(
            "Tiền đặt cọc sẽ được hoàn trả khi Bên B trả lại tài sản đúng hạn và đúng hiện trạng.",
        ));

    let landlord = Article::numbered(4, "Quyền và nghĩa vụ của Bên A")
        .line(Paragraph::plain(
            "- Giao tài sản đúng hiện trạng đã thỏa thuận và đúng thời hạn.",
        ))
        .line(Paragraph::plain(
            "- Đảm bảo quyền sử dụng của Bên B trong suốt thời gian thuê.",
        ))
        .line(Paragraph::plain(
            "- Không được đơn phương tăng giá thuê trong thời hạn hợp đồng.",
        ));

    let tenant = Article::numbered(5, "Quyền và nghĩa vụ của Bên B")
        .line(Paragraph::plain(
            "- Sử dụng tài sản đúng mục đích, giữ gìn và bảo quản tài sản cẩn thận.",
        ))
        .line(Paragraph::plain("- Thanh toán tiền thuê đầy đủ và đúng hạn."))
        .line(Paragraph::plain(
            "- Không được tự ý sửa chữa, cải tạo khi chưa được sự đồng ý của Bên A.",
        ))
        .line(Paragraph::plain(
            "- Trả lại tài sản đúng hiện trạng khi hết hạn hợp đồng.",
        ));

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("HỢP ĐỒNG THUÊ NHÀ")
        .doc_number(dated(f))
        .basis(BASIS_CIVIL_CODE)
        .basis("Căn cứ Luật Nhà ở số 27/2023/QH15 ngày 27/11/2023 (có hiệu lực từ 01/08/2024);")
        .basis(BASIS_MUTUAL_NEEDS)
        .text("Hôm nay, chúng tôi gồm:")
        .party(party(f, "a", "BÊN CHO THUÊ (Bên A):"))
        .party(party(f, "b", "BÊN THUÊ (Bên B):"))
        .text("Hai bên thỏa thuận ký kết hợp đồng thuê nhà với các điều khoản sau:")
        .article(property)
        .article(term)
        .article(payment)
        .article(landlord)
        .article(tenant)
        .blocks(clause_blocks(&ctx.clauses))
        .article(general_provisions(
            ctx,
            &[
                "Hợp đồng này được lập thành 02 bản có giá trị pháp lý như nhau, mỗi bên giữ 01 bản.",
                "Hợp đồng có hiệu lực kể từ ngày ký.",
            ],
        ))
        .signatures(party_signatures(f))
        .build()
}

pub(super) fn service(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("HỢP ĐỒNG DỊCH VỤ")
        .doc_number(dated(f))
        .basis(BASIS_CIVIL_CODE)
        .basis(BASIS_COMMERCIAL_LAW)
        .party(party(f, "a", "BÊN CUNG CẤP DỊCH VỤ (Bên A):"))
        .party(party(f, "b", "BÊN SỬ DỤNG DỊCH VỤ (Bên B):"))
        .article(
            Article::numbered(1, "Nội dung dịch vụ")
                .line(Paragraph::plain("Bên A cung cấp cho Bên B dịch vụ: ").bold(f.text("service_name")))
                .line(Paragraph::plain(f.text("service_desc"))),
        )
        .article(
            Article::numbered(2, "Giá trị hợp đồng")
                .line(
                    Paragraph::plain("Tổng giá trị: ")
                        .bold(vnd(f.money("service_price")))
                        .text(" (đã bao gồm VAT)."),
                )
                .line(Paragraph::plain(format!(
                    "Tiến độ thanh toán: {}",
                    f.text("payment_schedule")
                ))),
        )
        .article(
            Article::numbered(3, "Thời hạn")
                .line(Paragraph::plain("Hoàn thành trước ngày: ").bold(f.text("deadline"))),
        )
        .article(Article::numbered(4, "Nghiệm thu").line(Paragraph::plain(
            "Bên B nghiệm thu trong vòng 05 ngày làm việc kể từ khi Bên A bàn giao. Quá thời hạn không có ý kiến, coi như nghiệm thu đạt.",
        )))
        .blocks(clause_blocks(&ctx.clauses))
        .article(general_provisions(
            ctx,
            &["Hợp đồng lập thành 02 bản, mỗi bên giữ 01 bản có giá trị pháp lý như nhau."],
        ))
        .signatures(party_signatures(f))
        .build()
}

pub(super) fn labor(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    let employer = Party {
        label: "BÊN SỬ DỤNG LAO ĐỘNG (Bên A):".to_string(),
        lines: vec![
            Paragraph::plain("Tên công ty: ").bold(f.text("a_name")),
            Paragraph::plain(format!("Địa chỉ: {}", f.text("a_address"))),
            Paragraph::plain(format!("MST: {}", f.text("a_id"))),
            Paragraph::plain("Đại diện: ")
                .bold(f.text("a_rep"))
                .text(format!(" - Chức vụ: {}", f.text("a_position"))),
        ],
    };

    let employee = Party {
        label: "NGƯỜI LAO ĐỘNG (Bên B):".to_string(),
        lines: vec![
            Paragraph::plain("Họ và tên: ").bold(f.text("b_name")),
            Paragraph::plain(format!(
                "CMND/CCCD: {}{}",
                f.text("b_id"),
                f.optional("b_dob")
                    .map(|dob| format!(" | Ngày sinh: {}", dob))
                    .unwrap_or_default()
            )),
            Paragraph::plain(format!("Địa chỉ: {}", f.text("b_address"))),
        ],
    };

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("HỢP ĐỒNG LAO ĐỘNG")
        .doc_number(dated(f))
        .basis("Căn cứ Bộ luật Lao động số 45/2019/QH14 ngày 20/11/2019;")
        .party(employer)
        .party(employee)
        .article(
            Article::numbered(1, "Công việc và địa điểm")
                .line(Paragraph::plain("Chức danh: ").bold(f.text("job_title")))
                .line(Paragraph::plain(format!("Địa điểm: {}", f.text("work_location")))),
        )
        .article(
            Article::numbered(2, "Thời hạn hợp đồng")
                .line(Paragraph::plain("Loại: ").bold(f.text("contract_type")))
                .line(Paragraph::plain(format!("Từ ngày: {}", f.text("start_date"))))
                .line(Paragraph::plain(format!(
                    "Thử việc: {} ngày với mức lương 85% lương cơ bản.",
                    f.count_or("probation", 60)
                ))),
        )
        .article(
            Article::numbered(3, "Tiền lương và phụ cấp")
                .line(Paragraph::plain("Lương cơ bản: ").bold(format!("{}/tháng", vnd(f.money("salary")))))
                .line(Paragraph::plain(format!(
                    "Phụ cấp: {}/tháng",
                    vnd(f.money("allowance"))
                )))
                .line(Paragraph::plain(
                    "Thanh toán lương vào ngày 05 và 20 hàng tháng qua chuyển khoản.",
                )),
        )
        .article(
            Article::numbered(4, "Thời giờ làm việc")
                .line(Paragraph::plain(f.text("work_hours")))
                .line(Paragraph::plain(
                    "Làm thêm giờ theo quy định của Bộ luật Lao động 2019.",
                )),
        )
        .blocks(clause_blocks(&ctx.clauses))
        .signatures(party_signatures(f))
        .build()
}

pub(super) fn power_of_attorney(ctx: &RenderContext) -> Document {
    let f = &ctx.fields;

    DocumentBuilder::new(ctx.template.id, ctx.template.title)
        .republic_letterhead()
        .heading("GIẤY ỦY QUYỀN")
        .doc_number(dated(f))
        .basis("Căn cứ Bộ luật Dân sự số 91/2015/QH13 ngày 24/11/2015 (Điều 138-143 về đại diện và ủy quyền);")
        .party(party(f, "a", "BÊN ỦY QUYỀN:"))
        .party(party(f, "b", "BÊN ĐƯỢC ỦY QUYỀN:"))
        .article(Article::titled("NỘI DUNG ỦY QUYỀN").line(Paragraph::plain(f.text("scope"))))
        .article(Article::titled("THỜI HẠN ỦY QUYỀN").line(Paragraph::plain(f.text("duration"))))
        .article(Article::untitled().line(Paragraph::plain(
            "Bên được ủy quyền cam kết thực hiện đúng nội dung được ủy quyền và không được ủy quyền lại cho bên thứ ba (trừ trường hợp có sự đồng ý của Bên ủy quyền).",
        )))
        .blocks(clause_blocks(&ctx.clauses))
        .signatures(party_signatures(f))
        .build()
}
