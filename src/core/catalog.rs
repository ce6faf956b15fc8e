use crate::domain::model::Resort;
use crate::utils::error::{Result, SeekerError};
use crate::utils::validation::{find_duplicate, Validate};
use std::ops::RangeInclusive;
use std::path::Path;

const RATING_RANGE: RangeInclusive<u32> = 1..=3;

/// The full, load-once resort collection in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resorts: Vec<Resort>,
}

impl Catalog {
    pub fn new(resorts: Vec<Resort>) -> Result<Self> {
        let catalog = Self { resorts };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 從 JSON 檔案載入度假村資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading resort catalog from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(SeekerError::IoError)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!("📚 Loaded {} resorts", catalog.len());
        Ok(catalog)
    }

    /// 從 JSON 字串解析度假村陣列
    pub fn from_json_str(content: &str) -> Result<Self> {
        let resorts: Vec<Resort> = serde_json::from_str(content)?;
        Self::new(resorts)
    }

    pub fn resorts(&self) -> &[Resort] {
        &self.resorts
    }

    pub fn get(&self, id: &str) -> Option<&Resort> {
        self.resorts.iter().find(|resort| resort.id == id)
    }

    pub fn len(&self) -> usize {
        self.resorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resorts.is_empty()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        for (index, resort) in self.resorts.iter().enumerate() {
            if resort.id.trim().is_empty() {
                return Err(SeekerError::CatalogError {
                    message: format!("resort at index {} has an empty id", index),
                });
            }
            if resort.name.trim().is_empty() {
                return Err(SeekerError::CatalogError {
                    message: format!("resort '{}' has an empty name", resort.id),
                });
            }
            for (field, value) in [("price", resort.price), ("size", resort.size)] {
                if !RATING_RANGE.contains(&value) {
                    return Err(SeekerError::CatalogError {
                        message: format!(
                            "resort '{}' has {} {}, expected {} to {}",
                            resort.id,
                            field,
                            value,
                            RATING_RANGE.start(),
                            RATING_RANGE.end()
                        ),
                    });
                }
            }
        }

        if let Some(id) = find_duplicate(self.resorts.iter().map(|r| r.id.as_str())) {
            return Err(SeekerError::CatalogError {
                message: format!("duplicate resort id '{}'", id),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_RESORTS: &str = r#"[
        {"id": "Whistler", "name": "Whistler", "country": "Canada", "description": "Big.",
         "imageCredit": "A", "price": 3, "size": 3, "elevation": 2182, "runs": 200, "facilities": []},
        {"id": "Zermatt", "name": "Zermatt", "country": "Switzerland", "description": "Matterhorn.",
         "imageCredit": "B", "price": 3, "size": 2, "elevation": 3883, "runs": 110, "facilities": ["Family"]}
    ]"#;

    #[test]
    fn test_parse_catalog_keeps_dataset_order() {
        let catalog = Catalog::from_json_str(TWO_RESORTS).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resorts()[0].id, "Whistler");
        assert_eq!(catalog.resorts()[1].id, "Zermatt");
        assert_eq!(catalog.get("Zermatt").unwrap().country, "Switzerland");
        assert!(catalog.get("Verbier").is_none());
    }

    #[test]
    fn test_empty_array_is_a_valid_catalog() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "Zermatt", "name": "Zermatt", "country": "Switzerland", "description": "",
             "imageCredit": "", "price": 1, "size": 1, "elevation": 1, "runs": 1},
            {"id": "Zermatt", "name": "Zermatt 2", "country": "Switzerland", "description": "",
             "imageCredit": "", "price": 1, "size": 1, "elevation": 1, "runs": 1}
        ]"#;

        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, SeekerError::CatalogError { .. }));
        assert!(err.to_string().contains("duplicate resort id 'Zermatt'"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let json = r#"[
            {"id": " ", "name": "Nameless", "country": "Nowhere", "description": "",
             "imageCredit": "", "price": 1, "size": 1, "elevation": 1, "runs": 1}
        ]"#;

        assert!(matches!(
            Catalog::from_json_str(json),
            Err(SeekerError::CatalogError { .. })
        ));
    }

    #[test]
    fn test_out_of_range_price_and_size_are_rejected() {
        let record = |price: u32, size: u32| {
            format!(
                r#"[{{"id": "Vail", "name": "Vail", "country": "USA", "description": "",
                     "imageCredit": "", "price": {}, "size": {}, "elevation": 2475, "runs": 195}}]"#,
                price, size
            )
        };

        assert!(Catalog::from_json_str(&record(3, 1)).is_ok());

        let err = Catalog::from_json_str(&record(4000000000, 1)).unwrap_err();
        assert!(matches!(err, SeekerError::CatalogError { .. }));
        assert!(err.to_string().contains("price 4000000000"));

        let err = Catalog::from_json_str(&record(2, 0)).unwrap_err();
        assert!(err.to_string().contains("size 0"));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let err = Catalog::from_json_str(r#"{"id": "not an array"}"#).unwrap_err();
        assert!(matches!(err, SeekerError::SerializationError(_)));
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(TWO_RESORTS.as_bytes()).unwrap();

        let catalog = Catalog::from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Catalog::from_file("/definitely/not/here/resorts.json").unwrap_err();
        assert!(matches!(err, SeekerError::IoError(_)));
    }
}
