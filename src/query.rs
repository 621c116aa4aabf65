// src/query.rs

use url::Url;

/// Synchronous TAP query endpoint of the NASA Exoplanet Archive.
static TAP_SYNC_BASE: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// All columns of the Planetary Systems table, restricted to the row the
/// archive marks as the default parameter set for each planet.
static CONFIRMED_PLANETS_QUERY: &str = "select+*+from+ps+where+default_flag=1";

/// All columns of the composite-parameters table (best-available values
/// merged across reference solutions).
static PSCOMPPARS_QUERY: &str = "select+*+from+pscomppars";

fn tap_url(query: &str) -> Url {
    // The query strings above are already TAP-encoded (`+` for spaces), so
    // they are spliced in verbatim rather than re-encoded.
    Url::parse(&format!("{}?query={}&format=csv", TAP_SYNC_BASE, query))
        .expect("TAP query URL should parse")
}

/// URL returning every confirmed planet's default parameter set as CSV.
pub fn confirmed_planets_url() -> Url {
    tap_url(CONFIRMED_PLANETS_QUERY)
}

/// URL returning the full PSCompPars table as CSV.
pub fn composite_parameters_url() -> Url {
    tap_url(PSCOMPPARS_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_planets_url_matches_archive_form() {
        assert_eq!(
            confirmed_planets_url().as_str(),
            "https://exoplanetarchive.ipac.caltech.edu/TAP/sync\
             ?query=select+*+from+ps+where+default_flag=1&format=csv"
        );
    }

    #[test]
    fn composite_parameters_url_matches_archive_form() {
        assert_eq!(
            composite_parameters_url().as_str(),
            "https://exoplanetarchive.ipac.caltech.edu/TAP/sync\
             ?query=select+*+from+pscomppars&format=csv"
        );
    }
}
