use crate::core::models::{ApiEndpoint, CountryCode, Currency};
use crate::core::route::Route;
use crate::tui::screens::{Screen, Section};

const SAMPLE_AMOUNT: f64 = 1234.5;

/// Payload a QR generator would encode for one combination of codes.
pub fn qr_payload(country: CountryCode, currency: Currency, endpoint: ApiEndpoint) -> String {
    format!(
        "{}|{}|{} {}",
        country.iso(),
        currency.iso(),
        endpoint.method().as_str(),
        endpoint.path()
    )
}

pub fn screen() -> Screen {
    let countries = CountryCode::ALL.iter().map(|c| {
        format!(
            "{} {}  {:<15} {}",
            c.flag(),
            c.iso(),
            c.name(),
            c.dial_prefix()
        )
    });

    let currencies = Currency::ALL.iter().map(|c| {
        format!(
            "{} {}  {:<15} {}",
            c.iso(),
            c.symbol(),
            c.name(),
            c.format(SAMPLE_AMOUNT)
        )
    });

    let endpoints = ApiEndpoint::ALL.iter().flat_map(|e| {
        [
            format!("{:<5} {:<14} {}", e.method().as_str(), e.path(), e.description()),
            format!("      ↳ {}", e.sample_response()),
        ]
    });

    let qr = [
        (CountryCode::Spain, Currency::Euro, ApiEndpoint::Users),
        (CountryCode::Mexico, Currency::Peso, ApiEndpoint::Auth),
    ]
    .into_iter()
    .map(|(country, currency, endpoint)| qr_payload(country, currency, endpoint));

    Screen::new(Route::CodeRepresentations)
        .section(Section::text(
            "Practical uses",
            [
                "Enums are a type-safe home for codes, identifiers and",
                "system constants: no stray strings, no typos.",
            ],
        ))
        .section(Section::text("1. Country codes (ISO 3166)", countries))
        .section(Section::text("2. Currency codes (ISO 4217)", currencies))
        .section(Section::text("3. API endpoints", endpoints))
        .section(Section::text("4. Generated codes", qr))
}
