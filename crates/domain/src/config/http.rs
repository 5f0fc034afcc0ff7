use serde::{Deserialize, Serialize};

/// `Cache-Control: max-age` values (seconds) attached to gateway responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_home_max_age")]
    pub home_max_age: u32,

    #[serde(default = "default_record_max_age")]
    pub record_max_age: u32,

    #[serde(default = "default_page_max_age")]
    pub page_max_age: u32,

    #[serde(default = "default_not_found_max_age")]
    pub not_found_max_age: u32,

    #[serde(default = "default_not_implemented_max_age")]
    pub not_implemented_max_age: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            home_max_age: default_home_max_age(),
            record_max_age: default_record_max_age(),
            page_max_age: default_page_max_age(),
            not_found_max_age: default_not_found_max_age(),
            not_implemented_max_age: default_not_implemented_max_age(),
        }
    }
}

fn default_home_max_age() -> u32 {
    12
}

fn default_record_max_age() -> u32 {
    12
}

fn default_page_max_age() -> u32 {
    10
}

fn default_not_found_max_age() -> u32 {
    13
}

fn default_not_implemented_max_age() -> u32 {
    21
}
