//! Inventory lookups over the storefront JSON API.

use async_trait::async_trait;
use serde::Deserialize;

use trolley_core::{ProductId, ProductInfo, StockInfo};
use trolley_store::InventoryService;

/// [`InventoryService`] backed by the storefront API.
///
/// `GET {base}/stock/{id}` and `GET {base}/products/{id}`, plain
/// request/response with no retries; transport errors bubble up for the
/// store to map at the operation boundary.
#[derive(Debug, Clone)]
pub struct HttpInventoryService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T>(&self, path: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }
}

/// Wire shape of `GET /stock/{id}`.
#[derive(Debug, Deserialize)]
struct StockDto {
    id: u64,
    amount: u32,
}

/// Wire shape of `GET /products/{id}`; the API quotes prices as a decimal
/// currency amount.
#[derive(Debug, Deserialize)]
struct ProductDto {
    title: String,
    price: f64,
    image: String,
}

impl From<StockDto> for StockInfo {
    fn from(dto: StockDto) -> Self {
        StockInfo {
            id: ProductId::new(dto.id),
            amount: dto.amount,
        }
    }
}

impl From<ProductDto> for ProductInfo {
    fn from(dto: ProductDto) -> Self {
        ProductInfo {
            title: dto.title,
            price: to_cents(dto.price),
            image: dto.image,
        }
    }
}

/// Convert a decimal currency amount to the smallest unit.
fn to_cents(price: f64) -> u64 {
    (price * 100.0).round().max(0.0) as u64
}

#[async_trait]
impl InventoryService for HttpInventoryService {
    async fn stock(&self, id: ProductId) -> anyhow::Result<StockInfo> {
        let dto: StockDto = self.get_json(&format!("stock/{id}")).await?;
        Ok(dto.into())
    }

    async fn product(&self, id: ProductId) -> anyhow::Result<ProductInfo> {
        let dto: ProductDto = self.get_json(&format!("products/{id}")).await?;
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_payload_deserializes() {
        let dto: StockDto = serde_json::from_str(r#"{"id": 1, "amount": 3}"#).unwrap();
        let info: StockInfo = dto.into();
        assert_eq!(info.id, ProductId::new(1));
        assert_eq!(info.amount, 3);
    }

    #[test]
    fn product_payload_converts_price_to_cents() {
        let json = r#"{
            "id": 2,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://cdn.example.com/2.jpg"
        }"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let info: ProductInfo = dto.into();
        assert_eq!(info.price, 17_990);
        assert_eq!(info.title, "Tênis de Caminhada Leve Confortável");
    }

    #[test]
    fn price_conversion_rounds_to_nearest_cent() {
        assert_eq!(to_cents(19.99), 1999);
        assert_eq!(to_cents(0.1), 10);
        assert_eq!(to_cents(0.0), 0);
        // Malformed negative prices clamp to zero instead of wrapping.
        assert_eq!(to_cents(-1.5), 0);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let svc = HttpInventoryService::new("http://localhost:3333/");
        assert_eq!(svc.base_url, "http://localhost:3333");
    }
}
