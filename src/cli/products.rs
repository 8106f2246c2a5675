use super::ui;
use crate::core::catalog::{Page, ProductQuery, VisaCatalog, VisaProduct};
use anyhow::Result;
use comfy_table::Cell;

impl Page<VisaProduct> {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("ID"),
            ui::header_cell("Country"),
            ui::header_cell("Visa Type"),
            ui::header_cell("Price (USD)"),
            ui::header_cell("Stay (days)"),
            ui::header_cell("Entries"),
            ui::header_cell("Filing Fee (USD)"),
        ]);

        for product in &self.data {
            table.add_row(vec![
                Cell::new(&product.id),
                Cell::new(&product.country),
                Cell::new(&product.visa_type),
                ui::amount_cell(product.price),
                ui::count_cell(product.length_of_stay),
                Cell::new(product.number_of_entries),
                ui::amount_cell(product.filing_fee),
            ]);
        }

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Visa Products", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{} {} of {} ({} products)",
            ui::style_text("Page", ui::StyleType::TotalLabel),
            self.page,
            self.total_pages.max(1),
            self.total
        ));
        output
    }
}

pub async fn run(catalog: &VisaCatalog, query: &ProductQuery) -> Result<()> {
    let page = catalog.find_all(query).await?;
    println!("{}", page.display_as_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_display_as_table() {
        console::set_colors_enabled(false);
        let catalog = VisaCatalog::seeded();
        let query = ProductQuery {
            country: Some("uk".to_string()),
            ..Default::default()
        };
        let output = catalog.find_all(&query).await.unwrap().display_as_table();

        assert!(output.contains("Visa Products"));
        assert!(output.contains("Student"));
        assert!(output.contains("450.00"));
        assert!(output.ends_with("Page 1 of 1 (3 products)"));
    }
}
