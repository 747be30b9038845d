//! Purchase receipt handed back as a PDF download after checkout.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    cart::Cart,
    error::{AppError, AppResult},
    models::Order,
};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: Mm = Mm(20.0);
const TOP: f32 = 270.0;
const BOTTOM: f32 = 25.0;
const LINE_HEIGHT: f32 = 7.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i32,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: Uuid,
    pub customer: String,
    pub date: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
}

impl Receipt {
    pub fn new(order: &Order, customer: impl Into<String>, cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        Self {
            order_id: order.id,
            customer: customer.into(),
            date: order.date,
            lines,
            total: order.total,
        }
    }

    pub fn file_name(&self) -> String {
        format!("ticket_{}.pdf", self.order_id)
    }

    pub fn header_lines(&self) -> Vec<String> {
        vec![
            format!("Order ID: {}", self.order_id),
            format!("Customer: {}", self.customer),
            format!("Date: {}", self.date.format("%Y-%m-%d %H:%M:%S UTC")),
        ]
    }

    pub fn item_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{} x{} - ${:.2}", line.name, line.quantity, line.subtotal))
            .collect()
    }

    pub fn total_line(&self) -> String {
        format!("Total paid: ${:.2}", self.total)
    }

    pub fn render_pdf(&self) -> AppResult<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new("Purchase receipt", PAGE_WIDTH, PAGE_HEIGHT, "receipt");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let mut writer = PageWriter {
            layer: doc.get_page(page).get_layer(layer),
            y: TOP,
        };

        writer.text(&doc, "Purchase receipt - Online Shop", 20.0, &bold);
        writer.skip();
        for line in self.header_lines() {
            writer.text(&doc, &line, 12.0, &regular);
        }
        writer.skip();
        for line in self.item_lines() {
            writer.text(&doc, &line, 12.0, &regular);
        }
        writer.skip();
        writer.text(&doc, &self.total_line(), 16.0, &bold);

        doc.save_to_bytes().map_err(pdf_error)
    }
}

/// Tracks the cursor on the current page and opens a new page when it runs out.
struct PageWriter {
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter {
    fn text(&mut self, doc: &PdfDocumentReference, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < BOTTOM {
            let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "receipt");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
        self.layer.use_text(text, size, MARGIN_LEFT, Mm(self.y), font);
        self.y -= LINE_HEIGHT * (size / 12.0).max(1.0);
    }

    fn skip(&mut self) {
        self.y -= LINE_HEIGHT;
    }
}

fn pdf_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Internal(anyhow::anyhow!("receipt rendering failed: {err}"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn receipt_for(lines: usize) -> Receipt {
        let mut cart = Cart::new();
        for n in 0..lines {
            cart.add(Uuid::from_u128(n as u128), format!("Item {n}"), Decimal::new(999, 2), "");
        }
        cart.add(Uuid::from_u128(0), "Item 0", Decimal::new(999, 2), "");

        let order = Order {
            id: Uuid::from_u128(77),
            user_id: Uuid::from_u128(1),
            total: cart.total(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        };
        Receipt::new(&order, "ferris", &cart)
    }

    #[test]
    fn file_name_uses_order_id() {
        let receipt = receipt_for(1);
        assert_eq!(
            receipt.file_name(),
            "ticket_00000000-0000-0000-0000-00000000004d.pdf"
        );
    }

    #[test]
    fn lines_show_quantity_and_subtotal() {
        let receipt = receipt_for(2);
        assert_eq!(receipt.item_lines(), vec![
            "Item 0 x2 - $19.98".to_string(),
            "Item 1 x1 - $9.99".to_string(),
        ]);
        assert_eq!(receipt.total_line(), "Total paid: $29.97");
        assert_eq!(receipt.header_lines()[1], "Customer: ferris");
        assert_eq!(receipt.header_lines()[2], "Date: 2024-05-01 09:30:00 UTC");
    }

    #[test]
    fn sub_cent_prices_agree_with_stored_total() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(Uuid::from_u128(5), "Pin", Decimal::new(5, 3), "");
        }
        let order = Order {
            id: Uuid::from_u128(78),
            user_id: Uuid::from_u128(1),
            total: cart.total(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        };
        let receipt = Receipt::new(&order, "ferris", &cart);

        assert_eq!(receipt.item_lines(), vec!["Pin x3 - $0.03".to_string()]);
        assert_eq!(receipt.total_line(), "Total paid: $0.03");
        assert_eq!(receipt.total, Decimal::new(3, 2));
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = receipt_for(3).render_pdf().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_receipts_spill_onto_more_pages() {
        let bytes = receipt_for(80).render_pdf().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
