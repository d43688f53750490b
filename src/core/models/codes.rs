//! Enums standing in for codes and identifiers: ISO country codes, currency
//! codes and API endpoints.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Spain,
    France,
    Germany,
    Italy,
    Portugal,
    UnitedKingdom,
    UnitedStates,
    Mexico,
}

impl CountryCode {
    pub const ALL: [CountryCode; 8] = [
        CountryCode::Spain,
        CountryCode::France,
        CountryCode::Germany,
        CountryCode::Italy,
        CountryCode::Portugal,
        CountryCode::UnitedKingdom,
        CountryCode::UnitedStates,
        CountryCode::Mexico,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn iso(&self) -> &'static str {
        match self {
            CountryCode::Spain => "ES",
            CountryCode::France => "FR",
            CountryCode::Germany => "DE",
            CountryCode::Italy => "IT",
            CountryCode::Portugal => "PT",
            CountryCode::UnitedKingdom => "GB",
            CountryCode::UnitedStates => "US",
            CountryCode::Mexico => "MX",
        }
    }

    pub fn from_iso(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|country| country.iso().eq_ignore_ascii_case(code))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CountryCode::Spain => "Spain",
            CountryCode::France => "France",
            CountryCode::Germany => "Germany",
            CountryCode::Italy => "Italy",
            CountryCode::Portugal => "Portugal",
            CountryCode::UnitedKingdom => "United Kingdom",
            CountryCode::UnitedStates => "United States",
            CountryCode::Mexico => "Mexico",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            CountryCode::Spain => "🇪🇸",
            CountryCode::France => "🇫🇷",
            CountryCode::Germany => "🇩🇪",
            CountryCode::Italy => "🇮🇹",
            CountryCode::Portugal => "🇵🇹",
            CountryCode::UnitedKingdom => "🇬🇧",
            CountryCode::UnitedStates => "🇺🇸",
            CountryCode::Mexico => "🇲🇽",
        }
    }

    pub fn dial_prefix(&self) -> &'static str {
        match self {
            CountryCode::Spain => "+34",
            CountryCode::France => "+33",
            CountryCode::Germany => "+49",
            CountryCode::Italy => "+39",
            CountryCode::Portugal => "+351",
            CountryCode::UnitedKingdom => "+44",
            CountryCode::UnitedStates => "+1",
            CountryCode::Mexico => "+52",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Euro,
    Dollar,
    Pound,
    Yen,
    Peso,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Euro,
        Currency::Dollar,
        Currency::Pound,
        Currency::Yen,
        Currency::Peso,
    ];

    /// ISO 4217 code.
    pub fn iso(&self) -> &'static str {
        match self {
            Currency::Euro => "EUR",
            Currency::Dollar => "USD",
            Currency::Pound => "GBP",
            Currency::Yen => "JPY",
            Currency::Peso => "MXN",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Euro => "Euro",
            Currency::Dollar => "US Dollar",
            Currency::Pound => "Pound Sterling",
            Currency::Yen => "Japanese Yen",
            Currency::Peso => "Mexican Peso",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Euro => "€",
            Currency::Dollar | Currency::Peso => "$",
            Currency::Pound => "£",
            Currency::Yen => "¥",
        }
    }

    /// Formats `amount` the way the currency is usually written. Yen has no
    /// minor unit.
    pub fn format(&self, amount: f64) -> String {
        match self {
            Currency::Euro => format!("{amount:.2}€"),
            Currency::Dollar => format!("${amount:.2}"),
            Currency::Pound => format!("£{amount:.2}"),
            Currency::Yen => format!("¥{amount:.0}"),
            Currency::Peso => format!("${amount:.2} MXN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    Users,
    Posts,
    Comments,
    Auth,
    Profile,
}

impl ApiEndpoint {
    pub const ALL: [ApiEndpoint; 5] = [
        ApiEndpoint::Users,
        ApiEndpoint::Posts,
        ApiEndpoint::Comments,
        ApiEndpoint::Auth,
        ApiEndpoint::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::Users => "/api/users",
            ApiEndpoint::Posts => "/api/posts",
            ApiEndpoint::Comments => "/api/comments",
            ApiEndpoint::Auth => "/api/auth",
            ApiEndpoint::Profile => "/api/profile",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            ApiEndpoint::Auth => HttpMethod::Post,
            ApiEndpoint::Users | ApiEndpoint::Posts | ApiEndpoint::Comments | ApiEndpoint::Profile => {
                HttpMethod::Get
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApiEndpoint::Users => "Fetch users",
            ApiEndpoint::Posts => "Fetch posts",
            ApiEndpoint::Comments => "Fetch comments",
            ApiEndpoint::Auth => "Authenticate",
            ApiEndpoint::Profile => "User profile",
        }
    }

    /// Canned response body for the simulated call.
    pub fn sample_response(&self) -> &'static str {
        match self {
            ApiEndpoint::Users => r#"{ "users": ["Alice", "Bob", "Charlie"] }"#,
            ApiEndpoint::Posts => r#"{ "posts": [{ "id": 1, "title": "Hello" }] }"#,
            ApiEndpoint::Comments => r#"{ "status": "success", "data": [...] }"#,
            ApiEndpoint::Auth => r#"{ "token": "..." }"#,
            ApiEndpoint::Profile => r#"{ "error": "Not found", "code": 404 }"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_lookup_is_case_insensitive() {
        assert_eq!(CountryCode::from_iso("mx"), Some(CountryCode::Mexico));
        assert_eq!(CountryCode::from_iso("GB"), Some(CountryCode::UnitedKingdom));
        assert_eq!(CountryCode::from_iso("XX"), None);
        assert_eq!(CountryCode::Portugal.dial_prefix(), "+351");
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::Euro.format(12.5), "12.50€");
        assert_eq!(Currency::Dollar.format(3.0), "$3.00");
        assert_eq!(Currency::Yen.format(1999.6), "¥2000");
        assert_eq!(Currency::Peso.format(10.0), "$10.00 MXN");
    }

    #[test]
    fn test_only_auth_posts() {
        let posts: Vec<_> = ApiEndpoint::ALL
            .iter()
            .filter(|e| e.method() == HttpMethod::Post)
            .collect();
        assert_eq!(posts, vec![&ApiEndpoint::Auth]);
        assert_eq!(ApiEndpoint::Profile.method().as_str(), "GET");
    }
}
