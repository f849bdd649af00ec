//! Startup country list

use std::fs;
use std::path::Path;

use tracing::info;

use crate::api::HttpApi;
use crate::config::CountrySource;
use crate::error::CountryListError;
use crate::model::CountryOption;

/// Fill the country selector from the configured source
pub async fn load(
    source: CountrySource,
    api: &HttpApi,
) -> Result<Vec<CountryOption>, CountryListError> {
    let countries = match source {
        CountrySource::File(path) => from_file(&path)?,
        CountrySource::Listed(countries) => countries,
        CountrySource::Endpoint => api.countries().await?,
    };
    info!(count = countries.len(), "countries loaded");
    Ok(countries)
}

/// Read a JSON array of `{id, name}` objects
pub fn from_file(path: &Path) -> Result<Vec<CountryOption>, CountryListError> {
    let body = fs::read_to_string(path).map_err(|source| CountryListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| CountryListError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::CountryId;

    fn write_temp(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "weather-match-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_from_file() {
        let path = write_temp(
            "ok",
            r#"[{"id": 1, "name": "United States"}, {"id": 7, "name": "Ukraine"}]"#,
        );

        let countries = from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].id, CountryId(7));
        assert_eq!(countries[1].name, "Ukraine");
    }

    #[test]
    fn test_missing_file() {
        let err = from_file(Path::new("/nonexistent/weather-match/countries.json")).unwrap_err();
        assert!(matches!(err, CountryListError::Read { .. }));
        assert!(err.to_string().contains("countries.json"));
    }

    #[test]
    fn test_wrong_shape() {
        let path = write_temp("bad", r#"{"countries": []}"#);

        let err = from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, CountryListError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_listed_source_needs_no_server() {
        let api = HttpApi::new("http://127.0.0.1:9").unwrap();
        let listed = vec![CountryOption {
            id: CountryId(1),
            name: "US".into(),
        }];

        let countries = load(CountrySource::Listed(listed.clone()), &api)
            .await
            .unwrap();

        assert_eq!(countries, listed);
    }
}
