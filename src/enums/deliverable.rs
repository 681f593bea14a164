use std::fmt;

/// One output metric, materialized as its own JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deliverable {
    NumberOfProducts,
    TopProducts,
    PercentageSwedish,
}

impl Deliverable {
    pub const ALL: [Deliverable; 3] = [
        Deliverable::NumberOfProducts,
        Deliverable::TopProducts,
        Deliverable::PercentageSwedish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NumberOfProducts => "number_of_products",
            Self::TopProducts => "top_5_products",
            Self::PercentageSwedish => "percentage_swedish",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Deliverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
