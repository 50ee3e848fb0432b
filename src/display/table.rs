use crate::api::models::City;
use crate::utils::text::{format_area, group_thousands, truncate_text_unicode};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

const DESCRIPTION_MAX_WIDTH: usize = 48;
const ALL_COUNTRIES_LABEL: &str = "All";

/// Formatter for the city screens
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    /// Create a new TableDisplay instance
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Clamp for stable layout on very narrow or very wide terminals
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80), // Default width
        }
    }

    /// Create a TableDisplay instance with maximum width setting
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }
        table
    }

    fn header_cell(&self, title: &str) -> Cell {
        if self.use_colors {
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        } else {
            Cell::new(title)
        }
    }

    /// Render the cities list
    pub fn render_city_list(&self, cities: &[City]) -> String {
        if cities.is_empty() {
            return "No cities found.".to_string();
        }

        let mut table = self.new_table();
        table.set_header(vec![
            self.header_cell("ID"),
            self.header_cell("City"),
            self.header_cell("Country"),
            self.header_cell("Description"),
        ]);

        for city in cities {
            table.add_row(vec![
                Cell::new(&city.id),
                Cell::new(&city.city),
                Cell::new(&city.country),
                Cell::new(truncate_text_unicode(
                    &city.short_description,
                    DESCRIPTION_MAX_WIDTH,
                )),
            ]);
        }

        table.to_string()
    }

    /// Render the country picker line; the selection is bracketed
    pub fn render_country_filter(&self, keys: &[String], selected: Option<&str>) -> String {
        let mut options = Vec::with_capacity(keys.len() + 1);
        options.push(mark_selected(ALL_COUNTRIES_LABEL, selected.is_none()));
        for key in keys {
            options.push(mark_selected(key, selected == Some(key.as_str())));
        }
        format!("Country: {}", options.join(" | "))
    }

    /// Render the distinct countries as a single-column table
    pub fn render_country_keys(&self, keys: &[String]) -> String {
        if keys.is_empty() {
            return "No countries found.".to_string();
        }

        let mut table = self.new_table();
        table.set_header(vec![self.header_cell("Country")]);
        for key in keys {
            table.add_row(vec![Cell::new(key)]);
        }
        table.to_string()
    }

    /// Render the detail card of one city
    pub fn render_city_detail(&self, city: &City) -> String {
        let mut table = self.new_table();
        table.set_header(vec![self.header_cell(&city.city), self.header_cell("")]);
        table.add_row(vec![Cell::new("Country"), Cell::new(&city.country)]);
        table.add_row(vec![
            Cell::new("Description"),
            Cell::new(&city.short_description),
        ]);
        table.add_row(vec![
            Cell::new("Area"),
            Cell::new(format_area(city.data.area_sq_km)),
        ]);
        table.add_row(vec![
            Cell::new("Population"),
            Cell::new(group_thousands(city.data.population_count)),
        ]);
        table.to_string()
    }

    /// Render an alert with its single dismiss button
    pub fn render_alert(&self, message: &str, button: &str) -> String {
        format!("⚠️  {}  [{}]", message, button)
    }
}

fn mark_selected(label: &str, selected: bool) -> String {
    if selected {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}
