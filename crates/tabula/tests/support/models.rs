use tabula::{Identity, Record};

#[derive(Debug, Record)]
pub struct TaxonomyData {
    pub identity: Identity,

    #[key]
    pub kingdom: String,

    #[key]
    pub order: String,

    #[key]
    pub family: String,

    #[key]
    pub genus: String,
}

#[derive(Debug, Record)]
pub struct TreeData {
    pub identity: Identity,

    #[key]
    pub serial_number: i64,

    #[key]
    pub taxonomy: TaxonomyData,

    pub specie: String,
}

pub fn taxonomy(order: &str, family: &str, genus: &str) -> TaxonomyData {
    TaxonomyData {
        identity: Identity::new(),
        kingdom: "plantae".to_string(),
        order: order.to_string(),
        family: family.to_string(),
        genus: genus.to_string(),
    }
}

pub fn hibiscus() -> TaxonomyData {
    taxonomy("malvales", "malvaceae", "hibiscus")
}

pub fn rosa() -> TaxonomyData {
    taxonomy("rosales", "rosaceae", "rosa")
}

pub fn tree(serial_number: i64, taxonomy: TaxonomyData, specie: &str) -> TreeData {
    TreeData {
        identity: Identity::new(),
        serial_number,
        taxonomy,
        specie: specie.to_string(),
    }
}
