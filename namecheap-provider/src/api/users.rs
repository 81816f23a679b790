use crate::client::NamecheapClient;
use crate::error::Result;
use crate::operations::{USERS_GET_BALANCES, USERS_GET_PRICING};
use crate::request::Params;
use crate::types::{Balances, PricingQuery, ProductType};

impl NamecheapClient {
    /// `namecheap.users.getPricing`
    pub async fn users_get_pricing(&self, query: &PricingQuery) -> Result<Vec<ProductType>> {
        let mut params = Params::new();
        params
            .set("ProductType", query.product_type.as_str())
            .set_opt("ProductCategory", query.product_category.as_deref())
            .set_opt("ActionName", query.action_name.as_deref())
            .set_opt("ProductName", query.product_name.as_deref())
            .set_opt("PromotionCode", query.promotion_code.as_deref());
        self.dispatch(&USERS_GET_PRICING, params).await
    }

    /// `namecheap.users.getBalances`
    pub async fn users_get_balances(&self) -> Result<Balances> {
        self.dispatch(&USERS_GET_BALANCES, Params::new()).await
    }
}
