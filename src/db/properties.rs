//! Property listing queries and row mapping.

use serde::Serialize;
use tokio_postgres::{Client, Row};

use super::errors::{DbError, DbResult};

/// One listing row from the `properties` table.
///
/// The table carries an extra `city` column used by the search filter;
/// it is not part of the returned record.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub host_id: i64,
    pub host_name: String,
    pub neighbourhood_group: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: String,
    pub price: f64,
    pub minimum_nights: i32,
    pub number_of_reviews: i32,
    pub last_review: String,
    pub reviews_per_month: f64,
    pub calculated_host_listings_count: i32,
    pub availability_365: i32,
    pub number_of_reviews_ltm: i32,
    pub license: String,
}

impl Property {
    /// Bind a result row by column name, never by position.
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            host_id: row.try_get("host_id")?,
            host_name: row.try_get("host_name")?,
            neighbourhood_group: row.try_get("neighbourhood_group")?,
            neighbourhood: row.try_get("neighbourhood")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            room_type: row.try_get("room_type")?,
            price: row.try_get("price")?,
            minimum_nights: row.try_get("minimum_nights")?,
            number_of_reviews: row.try_get("number_of_reviews")?,
            last_review: row.try_get("last_review")?,
            reviews_per_month: row.try_get("reviews_per_month")?,
            calculated_host_listings_count: row.try_get("calculated_host_listings_count")?,
            availability_365: row.try_get("availability_365")?,
            number_of_reviews_ltm: row.try_get("number_of_reviews_ltm")?,
            license: row.try_get("license")?,
        })
    }
}

/// Fetch listings, optionally narrowed to an exact city match.
///
/// With no filter the rows come back in the datastore's natural order.
///
/// # Errors
/// Returns `DbError::QueryError` if the query fails or a row does not
/// decode.
pub async fn search_properties(client: &Client, city: Option<&str>) -> DbResult<Vec<Property>> {
    let rows = match city {
        Some(city) => {
            client
                .query(
                    r#"
                    SELECT id, name, host_id, host_name, neighbourhood_group,
                           neighbourhood, latitude, longitude, room_type, price,
                           minimum_nights, number_of_reviews, last_review,
                           reviews_per_month, calculated_host_listings_count,
                           availability_365, number_of_reviews_ltm, license
                    FROM properties
                    WHERE city = $1
                    "#,
                    &[&city],
                )
                .await
        }
        None => {
            client
                .query(
                    r#"
                    SELECT id, name, host_id, host_name, neighbourhood_group,
                           neighbourhood, latitude, longitude, room_type, price,
                           minimum_nights, number_of_reviews, last_review,
                           reviews_per_month, calculated_host_listings_count,
                           availability_365, number_of_reviews_ltm, license
                    FROM properties
                    "#,
                    &[],
                )
                .await
        }
    }
    .map_err(|e| DbError::QueryError(e.to_string()))?;

    rows.iter()
        .map(|row| Property::from_row(row).map_err(|e| DbError::QueryError(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property() -> Property {
        Property {
            id: 2539,
            name: "Clean & quiet apt home by the park".to_string(),
            host_id: 2787,
            host_name: "John".to_string(),
            neighbourhood_group: "Brooklyn".to_string(),
            neighbourhood: "Kensington".to_string(),
            latitude: 40.64749,
            longitude: -73.97237,
            room_type: "Private room".to_string(),
            price: 149.0,
            minimum_nights: 1,
            number_of_reviews: 9,
            last_review: "2018-10-19".to_string(),
            reviews_per_month: 0.21,
            calculated_host_listings_count: 6,
            availability_365: 365,
            number_of_reviews_ltm: 2,
            license: "".to_string(),
        }
    }

    #[test]
    fn test_record_has_eighteen_fields() {
        let json = serde_json::to_value(sample_property()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 18);
        assert!(!obj.contains_key("city"));
    }

    #[test]
    fn test_record_json_types() {
        let json = serde_json::to_value(sample_property()).unwrap();
        assert!(json["id"].is_i64());
        assert!(json["name"].is_string());
        assert!(json["latitude"].is_f64());
        assert!(json["price"].is_number());
        assert!(json["minimum_nights"].is_i64());
        assert!(json["last_review"].is_string());
        assert!(json["reviews_per_month"].is_f64());
        assert!(json["license"].is_string());
    }
}
