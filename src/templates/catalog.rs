//! Built-in template catalog.
//!
//! Every field names its section explicitly so a form groups the same way
//! no matter how fields are reordered.

use super::{ClauseNumbering, LineItemPolicy, Pricing, TaxRate, Template, TemplateKind};
use crate::schema::{Clause, Field};

const DEFAULT_UNIT: &str = "cái";

/// All built-in templates in catalog order.
pub fn builtin() -> Vec<Template> {
    vec![
        quotation(),
        invoice(),
        rental(),
        service(),
        sales(),
        labor(),
        power_of_attorney(),
        liquidation(),
        handover(),
        receipt(),
    ]
}

fn in_section(section: &str, fields: Vec<Field>) -> Vec<Field> {
    fields
        .into_iter()
        .map(|field| field.section(section))
        .collect()
}

/// Identification fields of one contracting party, `a_name`, `a_id`, ...
fn party_fields(prefix: &str, section: &str) -> Vec<Field> {
    in_section(
        section,
        vec![
            Field::text(format!("{}_name", prefix), "Họ và tên / Tên công ty")
                .required()
                .placeholder("Nguyễn Văn A / Công ty TNHH ABC"),
            Field::text(format!("{}_id", prefix), "CMND/CCCD/MST")
                .required()
                .placeholder("0123456789"),
            Field::text(format!("{}_address", prefix), "Địa chỉ")
                .required()
                .placeholder("123 Nguyễn Huệ, Q.1, TP.HCM")
                .full(),
            Field::text(format!("{}_phone", prefix), "Số điện thoại").placeholder("0901234567"),
            Field::text(format!("{}_email", prefix), "Email").placeholder("email@example.com"),
        ],
    )
}

fn two_parties(section_a: &str, section_b: &str) -> Vec<Field> {
    let mut fields = party_fields("a", section_a);
    fields.extend(party_fields("b", section_b));
    fields
}

fn common_clauses() -> Vec<Clause> {
    vec![
        Clause::new(
            "force_majeure",
            "Bất khả kháng",
            "Miễn trừ trách nhiệm khi có sự kiện bất khả kháng",
            "Không bên nào phải chịu trách nhiệm về việc không thực hiện hoặc chậm trễ thực hiện nghĩa vụ do sự kiện bất khả kháng theo quy định tại Điều 156 Bộ luật Dân sự 2015. Bên bị ảnh hưởng phải thông báo cho bên kia trong vòng 07 ngày kể từ khi sự kiện xảy ra.",
        )
        .preselected(),
        Clause::new(
            "dispute",
            "Giải quyết tranh chấp",
            "Thương lượng, hòa giải hoặc tòa án",
            "Mọi tranh chấp phát sinh từ hoặc liên quan đến Hợp đồng này trước hết được giải quyết bằng thương lượng giữa hai bên. Trường hợp không thương lượng được trong 30 ngày, tranh chấp sẽ được đưa ra Tòa án nhân dân có thẩm quyền giải quyết theo pháp luật Việt Nam.",
        )
        .preselected(),
        Clause::new(
            "confidential",
            "Bảo mật thông tin",
            "Cam kết bảo mật thông tin của các bên",
            "Các bên cam kết bảo mật mọi thông tin liên quan đến Hợp đồng này và không tiết lộ cho bên thứ ba nếu không được sự đồng ý bằng văn bản của bên kia, trừ trường hợp theo yêu cầu của cơ quan nhà nước có thẩm quyền. Nghĩa vụ bảo mật có hiệu lực trong thời hạn 02 năm kể từ ngày chấm dứt Hợp đồng.",
        ),
        Clause::new(
            "penalty",
            "Phạt vi phạm",
            "Phạt 8% giá trị hợp đồng khi vi phạm",
            "Bên vi phạm nghĩa vụ hợp đồng phải chịu phạt vi phạm bằng 8% giá trị phần nghĩa vụ bị vi phạm theo quy định tại Điều 418 Bộ luật Dân sự 2015. Ngoài khoản phạt, bên vi phạm còn phải bồi thường thiệt hại thực tế phát sinh.",
        ),
        Clause::new(
            "amendment",
            "Sửa đổi, bổ sung",
            "Mọi sửa đổi phải bằng văn bản",
            "Mọi sửa đổi, bổ sung Hợp đồng này phải được lập thành văn bản, có chữ ký của đại diện hợp pháp của cả hai bên. Các phụ lục, bổ sung (nếu có) sẽ là phần không tách rời của Hợp đồng.",
        ),
        Clause::new(
            "severability",
            "Hiệu lực từng phần",
            "Điều khoản vô hiệu không ảnh hưởng toàn bộ HĐ",
            "Nếu bất kỳ điều khoản nào của Hợp đồng bị cơ quan có thẩm quyền tuyên là vô hiệu, các điều khoản còn lại vẫn giữ nguyên hiệu lực. Các bên sẽ thương lượng thay thế điều khoản vô hiệu bằng điều khoản mới phù hợp với mục đích ban đầu.",
        ),
    ]
}

fn quotation() -> Template {
    let mut fields = in_section(
        "Thông tin công ty",
        vec![
            Field::text("company_name", "Tên công ty")
                .required()
                .placeholder("Công ty TNHH ABC"),
            Field::text("company_address", "Địa chỉ")
                .required()
                .placeholder("123 Nguyễn Huệ, Q.1, TP.HCM"),
            Field::text("company_phone", "Điện thoại").placeholder("028 1234 5678"),
            Field::text("company_tax", "Mã số thuế").placeholder("0301234567"),
        ],
    );
    fields.extend(in_section(
        "Thông tin báo giá",
        vec![
            Field::text("quote_number", "Số báo giá").placeholder("BG-2026-001"),
            Field::date("quote_date", "Ngày báo giá").required(),
            Field::number("valid_days", "Hiệu lực (ngày)").default_value("30"),
        ],
    ));
    fields.extend(in_section(
        "Thông tin khách hàng",
        vec![
            Field::text("customer_name", "Khách hàng")
                .required()
                .placeholder("Công ty XYZ"),
            Field::text("customer_address", "Địa chỉ").placeholder("456 Lê Lợi, Q.3, TP.HCM"),
            Field::text("customer_phone", "Điện thoại").placeholder("0901234567"),
            Field::text("customer_contact", "Người liên hệ").placeholder("Nguyễn Văn B"),
            Field::choice(
                "payment_terms",
                "Điều kiện thanh toán",
                &[
                    "Thanh toán 100% trước khi giao hàng",
                    "Thanh toán 50% đặt cọc, 50% khi giao hàng",
                    "Thanh toán trong vòng 30 ngày",
                    "Theo thỏa thuận",
                ],
            )
            .full(),
            Field::multiline("notes", "Ghi chú")
                .placeholder("Ghi chú thêm...")
                .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Quotation,
        id: "quotation",
        icon: "💰",
        title: "Báo Giá",
        description: "Tạo báo giá chuyên nghiệp theo Luật Thương mại 2005 (36/2005/QH11)",
        badge: Some("Phổ biến"),
        fields,
        clauses: vec![
            Clause::new(
                "warranty",
                "Bảo hành",
                "Điều khoản bảo hành sản phẩm/dịch vụ",
                "Sản phẩm/dịch vụ được bảo hành theo chính sách của công ty. Thời gian bảo hành tính từ ngày giao hàng/nghiệm thu.",
            )
            .preselected(),
            Clause::new(
                "delivery",
                "Giao hàng",
                "Điều kiện và thời gian giao hàng",
                "Thời gian giao hàng: trong vòng 7-14 ngày làm việc kể từ ngày xác nhận đơn hàng. Địa điểm giao hàng theo thỏa thuận.",
            )
            .preselected(),
        ],
        line_items: Some(LineItemPolicy {
            default_unit: DEFAULT_UNIT,
            pricing: Pricing::Taxed(TaxRate::VAT),
        }),
        numbering: ClauseNumbering::Inline,
        legal_sources: &["ltm2005", "blds2015"],
    }
}

fn invoice() -> Template {
    let mut fields = in_section(
        "Bên bán",
        vec![
            Field::text("company_name", "Tên công ty")
                .required()
                .placeholder("Công ty TNHH ABC"),
            Field::text("company_address", "Địa chỉ")
                .required()
                .placeholder("123 Nguyễn Huệ, Q.1, TP.HCM"),
            Field::text("company_phone", "Điện thoại").placeholder("028 1234 5678"),
            Field::text("company_tax", "Mã số thuế")
                .required()
                .placeholder("0301234567"),
            Field::text("company_bank", "Số TK ngân hàng").placeholder("1234567890 - Vietcombank"),
        ],
    );
    fields.extend(in_section(
        "Thông tin hóa đơn",
        vec![
            Field::text("inv_number", "Số hóa đơn").placeholder("HD-2026-001"),
            Field::date("inv_date", "Ngày xuất").required(),
        ],
    ));
    fields.extend(in_section(
        "Bên mua",
        vec![
            Field::text("customer_name", "Khách hàng")
                .required()
                .placeholder("Công ty XYZ"),
            Field::text("customer_address", "Địa chỉ").placeholder("456 Lê Lợi, Q.3"),
            Field::text("customer_tax", "MST khách hàng").placeholder("0309876543"),
            Field::text("customer_phone", "Điện thoại").placeholder("0901234567"),
            Field::choice(
                "payment_method",
                "Hình thức thanh toán",
                &["Chuyển khoản", "Tiền mặt", "Thẻ tín dụng"],
            )
            .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Invoice,
        id: "invoice",
        icon: "🧾",
        title: "Hóa Đơn",
        description: "Tạo hóa đơn bán hàng / dịch vụ theo NĐ 123/2020/NĐ-CP",
        badge: Some("Phổ biến"),
        fields,
        clauses: Vec::new(),
        line_items: Some(LineItemPolicy {
            default_unit: DEFAULT_UNIT,
            pricing: Pricing::Taxed(TaxRate::VAT),
        }),
        numbering: ClauseNumbering::Inline,
        legal_sources: &["nd123", "ltm2005"],
    }
}

fn rental() -> Template {
    let mut fields = two_parties("Bên A", "Bên B");
    fields.extend(in_section(
        "Thông tin tài sản",
        vec![
            Field::text("property_address", "Địa chỉ tài sản cho thuê")
                .required()
                .placeholder("Số 10 Đường ABC, P. XYZ, Q.1, TP.HCM")
                .full(),
            Field::number("property_area", "Diện tích (m²)")
                .required()
                .placeholder("100"),
            Field::multiline("property_desc", "Mô tả tài sản")
                .placeholder("Nhà 1 trệt 2 lầu, 3 phòng ngủ, 2 phòng tắm...")
                .full(),
        ],
    ));
    fields.extend(in_section(
        "Điều khoản thuê",
        vec![
            Field::number("rent_amount", "Giá thuê/tháng (VNĐ)")
                .required()
                .placeholder("10000000"),
            Field::number("deposit", "Tiền đặt cọc (VNĐ)")
                .required()
                .placeholder("20000000"),
            Field::date("rent_start", "Ngày bắt đầu").required(),
            Field::date("rent_end", "Ngày kết thúc").required(),
            Field::number("payment_day", "Ngày thanh toán hàng tháng")
                .default_value("5")
                .placeholder("5"),
            Field::choice(
                "payment_method",
                "Hình thức thanh toán",
                &["Chuyển khoản", "Tiền mặt"],
            )
            .full(),
        ],
    ));

    let mut clauses = common_clauses();
    clauses.extend(vec![
        Clause::new(
            "sublease",
            "Không cho thuê lại",
            "Cấm cho thuê lại mà không có sự đồng ý",
            "Bên B không được cho thuê lại, chuyển nhượng quyền thuê cho bên thứ ba dưới bất kỳ hình thức nào nếu không được sự đồng ý bằng văn bản của Bên A. Vi phạm điều này Bên A có quyền đơn phương chấm dứt hợp đồng.",
        )
        .preselected(),
        Clause::new(
            "repair",
            "Sửa chữa & bảo trì",
            "Trách nhiệm sửa chữa của mỗi bên",
            "Bên A chịu trách nhiệm sửa chữa lớn (kết cấu, hệ thống điện nước chính). Bên B chịu trách nhiệm bảo trì và sửa chữa nhỏ phát sinh trong quá trình sử dụng. Bên B phải thông báo ngay cho Bên A khi có hư hỏng cần sửa chữa lớn.",
        )
        .preselected(),
        Clause::new(
            "early_termination",
            "Chấm dứt trước hạn",
            "Điều kiện chấm dứt hợp đồng trước hạn",
            "Mỗi bên có quyền chấm dứt hợp đồng trước thời hạn với điều kiện thông báo bằng văn bản trước ít nhất 30 ngày. Bên chấm dứt trước hạn không có lý do chính đáng phải bồi thường cho bên kia 02 tháng tiền thuê.",
        ),
        Clause::new(
            "utilities",
            "Chi phí điện, nước, dịch vụ",
            "Quy định về thanh toán tiện ích",
            "Bên B chịu trách nhiệm thanh toán toàn bộ chi phí điện, nước, internet, truyền hình cáp và phí quản lý (nếu có) phát sinh trong thời gian thuê, theo đồng hồ đo riêng hoặc hóa đơn tên Bên B.",
        )
        .preselected(),
    ]);

    Template {
        kind: TemplateKind::Rental,
        id: "rental",
        icon: "🏠",
        title: "Hợp Đồng Thuê Nhà",
        description: "Hợp đồng cho thuê nhà/căn hộ theo BLDS 2015 và Luật Nhà ở 2023",
        badge: Some("Bất động sản"),
        fields,
        clauses,
        line_items: None,
        numbering: ClauseNumbering::AfterFixedArticles { fixed: 5 },
        legal_sources: &["blds2015", "lno2023"],
    }
}

fn service() -> Template {
    let mut fields = two_parties("Bên A", "Bên B");
    fields.extend(in_section(
        "Nội dung dịch vụ",
        vec![
            Field::text("service_name", "Tên dịch vụ")
                .required()
                .placeholder("Dịch vụ thiết kế website")
                .full(),
            Field::multiline("service_desc", "Mô tả chi tiết")
                .required()
                .placeholder("Mô tả chi tiết phạm vi công việc...")
                .full(),
            Field::number("service_price", "Giá trị hợp đồng (VNĐ)")
                .required()
                .placeholder("50000000"),
            Field::date("deadline", "Thời hạn hoàn thành").required(),
            Field::choice(
                "payment_schedule",
                "Tiến độ thanh toán",
                &[
                    "50% ký HĐ, 50% nghiệm thu",
                    "30% ký HĐ, 30% giữa, 40% nghiệm thu",
                    "100% sau nghiệm thu",
                    "Theo thỏa thuận riêng",
                ],
            )
            .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Service,
        id: "service",
        icon: "🤝",
        title: "Hợp Đồng Dịch Vụ",
        description: "Hợp đồng cung cấp dịch vụ theo BLDS 2015 và Luật Thương mại 2005 (36/2005/QH11)",
        badge: None,
        fields,
        clauses: common_clauses(),
        line_items: None,
        numbering: ClauseNumbering::AfterFixedArticles { fixed: 4 },
        legal_sources: &["blds2015", "ltm2005"],
    }
}

fn sales() -> Template {
    let mut fields = two_parties("Bên A", "Bên B");
    fields.extend(in_section(
        "Thông tin giao dịch",
        vec![
            Field::text("delivery_address", "Địa điểm giao hàng")
                .placeholder("123 ABC, TP.HCM")
                .full(),
            Field::date("delivery_date", "Thời hạn giao hàng").required(),
            Field::choice(
                "payment_method",
                "Thanh toán",
                &["Chuyển khoản", "Tiền mặt", "L/C"],
            )
            .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Sales,
        id: "sales",
        icon: "📦",
        title: "Hợp Đồng Mua Bán",
        description: "Hợp đồng mua bán hàng hóa theo BLDS 2015 và Luật Thương mại 2005 (36/2005/QH11)",
        badge: None,
        fields,
        clauses: common_clauses(),
        line_items: Some(LineItemPolicy {
            default_unit: DEFAULT_UNIT,
            pricing: Pricing::Untaxed,
        }),
        numbering: ClauseNumbering::FixedOffset(10),
        legal_sources: &["blds2015", "ltm2005"],
    }
}

fn labor() -> Template {
    let mut fields = in_section(
        "Bên sử dụng lao động (Bên A)",
        vec![
            Field::text("a_name", "Tên công ty")
                .required()
                .placeholder("Công ty TNHH ABC"),
            Field::text("a_address", "Địa chỉ")
                .required()
                .placeholder("123 Nguyễn Huệ"),
            Field::text("a_id", "MST").required().placeholder("0301234567"),
            Field::text("a_rep", "Người đại diện")
                .required()
                .placeholder("Nguyễn Văn X"),
            Field::text("a_position", "Chức vụ").placeholder("Giám đốc"),
        ],
    );
    fields.extend(in_section(
        "Người lao động (Bên B)",
        vec![
            Field::text("b_name", "Họ và tên")
                .required()
                .placeholder("Nguyễn Văn A"),
            Field::text("b_id", "CMND/CCCD").required().placeholder("0123456789"),
            Field::date("b_dob", "Ngày sinh"),
            Field::text("b_address", "Địa chỉ thường trú")
                .required()
                .placeholder("456 Lê Lợi")
                .full(),
        ],
    ));
    fields.extend(in_section(
        "Nội dung lao động",
        vec![
            Field::choice(
                "contract_type",
                "Loại hợp đồng",
                &[
                    "Không xác định thời hạn",
                    "Xác định thời hạn (12 tháng)",
                    "Xác định thời hạn (36 tháng)",
                ],
            )
            .full(),
            Field::date("start_date", "Ngày bắt đầu").required(),
            Field::text("job_title", "Chức danh")
                .required()
                .placeholder("Nhân viên kinh doanh"),
            Field::text("work_location", "Địa điểm làm việc").placeholder("Trụ sở công ty"),
            Field::number("salary", "Lương cơ bản (VNĐ/tháng)")
                .required()
                .placeholder("15000000"),
            Field::number("allowance", "Phụ cấp (VNĐ/tháng)").placeholder("2000000"),
            Field::number("probation", "Thử việc (ngày)").default_value("60"),
            Field::text("work_hours", "Giờ làm việc")
                .default_value("8:00 - 17:00, Thứ 2 - Thứ 6")
                .full(),
        ],
    ));

    let mut clauses = common_clauses();
    clauses.extend(vec![
        Clause::new(
            "insurance",
            "Bảo hiểm xã hội",
            "Đóng BHXH, BHYT, BHTN theo luật",
            "Bên A có trách nhiệm đóng bảo hiểm xã hội, bảo hiểm y tế, bảo hiểm thất nghiệp cho Bên B theo quy định của pháp luật hiện hành. Bên B đồng ý để Bên A trích lương đóng phần bảo hiểm thuộc trách nhiệm của người lao động.",
        )
        .preselected(),
        Clause::new(
            "annual_leave",
            "Nghỉ phép",
            "12 ngày phép năm theo luật",
            "Bên B được hưởng 12 ngày nghỉ phép năm hưởng nguyên lương theo Điều 113 Bộ luật Lao động 2019. Ngày nghỉ phép tăng thêm theo thâm niên: cứ 05 năm làm việc thêm 01 ngày.",
        )
        .preselected(),
    ]);

    Template {
        kind: TemplateKind::Labor,
        id: "labor",
        icon: "👔",
        title: "Hợp Đồng Lao Động",
        description: "Theo Bộ luật Lao động 2019 (45/2019/QH14), có hiệu lực từ 01/01/2021",
        badge: Some("Quan trọng"),
        fields,
        clauses,
        line_items: None,
        numbering: ClauseNumbering::FixedOffset(10),
        legal_sources: &["blld2019", "blds2015"],
    }
}

fn power_of_attorney() -> Template {
    let mut fields = two_parties("Bên ủy quyền", "Bên được ủy quyền");
    fields.extend(in_section(
        "Nội dung",
        vec![
            Field::multiline("scope", "Nội dung ủy quyền")
                .required()
                .placeholder("Đại diện ký kết hợp đồng mua bán...")
                .full(),
            Field::text("duration", "Thời hạn ủy quyền")
                .required()
                .placeholder("Từ ngày... đến ngày... / Cho đến khi hoàn thành công việc"),
        ],
    ));

    Template {
        kind: TemplateKind::PowerOfAttorney,
        id: "poa",
        icon: "📝",
        title: "Giấy Ủy Quyền",
        description: "Giấy ủy quyền theo Bộ luật Dân sự 2015 (91/2015/QH13), Điều 138-143",
        badge: None,
        fields,
        clauses: vec![Clause::new(
            "revoke",
            "Thu hồi ủy quyền",
            "Điều kiện thu hồi",
            "Bên ủy quyền có quyền thu hồi ủy quyền bất cứ lúc nào bằng văn bản thông báo. Việc thu hồi có hiệu lực kể từ khi Bên được ủy quyền nhận được thông báo.",
        )
        .preselected()],
        line_items: None,
        numbering: ClauseNumbering::FixedOffset(10),
        legal_sources: &["blds2015"],
    }
}

fn liquidation() -> Template {
    let mut fields = two_parties("Bên A", "Bên B");
    fields.extend(in_section(
        "Thông tin hợp đồng gốc",
        vec![
            Field::text("contract_ref", "Số hợp đồng thanh lý")
                .required()
                .placeholder("HĐ-2026-001"),
            Field::date("contract_date", "Ngày ký HĐ gốc").required(),
            Field::number("contract_value", "Giá trị HĐ gốc (VNĐ)")
                .required()
                .placeholder("100000000"),
            Field::number("paid_amount", "Đã thanh toán (VNĐ)")
                .required()
                .placeholder("100000000"),
            Field::multiline("completion_note", "Kết quả thực hiện")
                .placeholder("Bên A đã hoàn thành đầy đủ nghĩa vụ...")
                .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Liquidation,
        id: "liquidation",
        icon: "📋",
        title: "Biên Bản Thanh Lý HĐ",
        description: "Biên bản thanh lý hợp đồng theo BLDS 2015 (91/2015/QH13)",
        badge: None,
        fields,
        clauses: Vec::new(),
        line_items: None,
        numbering: ClauseNumbering::Inline,
        legal_sources: &["blds2015"],
    }
}

fn handover() -> Template {
    let mut fields = two_parties("Bên A", "Bên B");
    fields.extend(in_section(
        "Thông tin bàn giao",
        vec![
            Field::text("handover_reason", "Lý do bàn giao")
                .placeholder("Bàn giao theo Hợp đồng số...")
                .full(),
            Field::text("handover_location", "Địa điểm bàn giao")
                .placeholder("Kho hàng, 789 Trần Hưng Đạo"),
            Field::date("handover_date", "Ngày bàn giao").required(),
            Field::multiline("condition_note", "Tình trạng tài sản")
                .placeholder("Tốt, đầy đủ, đúng số lượng...")
                .full(),
        ],
    ));

    Template {
        kind: TemplateKind::Handover,
        id: "handover",
        icon: "🤲",
        title: "Biên Bản Giao Nhận",
        description: "Biên bản bàn giao tài sản theo BLDS 2015 (91/2015/QH13)",
        badge: None,
        fields,
        clauses: Vec::new(),
        line_items: Some(LineItemPolicy {
            default_unit: DEFAULT_UNIT,
            pricing: Pricing::Unpriced,
        }),
        numbering: ClauseNumbering::Inline,
        legal_sources: &["blds2015"],
    }
}

fn receipt() -> Template {
    let fields = in_section(
        "Thông tin",
        vec![
            Field::text("receiver_name", "Người nhận")
                .required()
                .placeholder("Nguyễn Văn A"),
            Field::text("receiver_id", "CMND/CCCD")
                .required()
                .placeholder("0123456789"),
            Field::text("payer_name", "Người giao")
                .required()
                .placeholder("Trần Văn B"),
            Field::text("payer_id", "CMND/CCCD người giao").placeholder("0987654321"),
            Field::number("amount", "Số tiền (VNĐ)")
                .required()
                .placeholder("10000000"),
            Field::text("reason", "Lý do")
                .required()
                .placeholder("Thanh toán tiền thuê nhà tháng 3/2026")
                .full(),
            Field::date("receipt_date", "Ngày").required(),
        ],
    );

    Template {
        kind: TemplateKind::Receipt,
        id: "receipt",
        icon: "🧾",
        title: "Giấy Biên Nhận",
        description: "Giấy xác nhận đã nhận tiền/tài sản theo BLDS 2015 (91/2015/QH13)",
        badge: None,
        fields,
        clauses: Vec::new(),
        line_items: None,
        numbering: ClauseNumbering::Inline,
        legal_sources: &["blds2015"],
    }
}
