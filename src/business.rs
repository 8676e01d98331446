use serde::{Deserialize, Serialize};

/// Postal address of the business location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// `"<city>, <state> <zip>"`, the last line of a mailing address.
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }

    /// Address lines in display order. An empty suite is skipped.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.street.clone()];
        if !self.suite.trim().is_empty() {
            lines.push(self.suite.clone());
        }
        lines.push(self.city_line());
        lines
    }
}

/// Read-only identity of the business taking the booking.
///
/// Supplied once by the host when the wizard is created and shown unchanged by
/// every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub name: String,
    pub logo: String,
    pub address: Address,
    pub email: String,
    pub phone: String,
}

impl Default for Business {
    fn default() -> Self {
        Self {
            name: "Gold Spa".into(),
            logo: "/gold_spa_logo.png".into(),
            address: Address {
                street: "2525 Camino del Rio S".into(),
                suite: "Suite 315 Room 8".into(),
                city: "San Diego".into(),
                state: "CA".into(),
                zip_code: "92108".into(),
            },
            email: "goldspa@gmail.com".into(),
            phone: "+11 123 4567 222".into(),
        }
    }
}
