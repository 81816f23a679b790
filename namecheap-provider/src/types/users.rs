use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

/// Filters for `users.getPricing`. Only `product_type` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuery {
    /// `DOMAIN`, `SSLCERTIFICATE` or `WHOISGUARD`.
    pub product_type: String,
    pub product_category: Option<String>,
    pub action_name: Option<String>,
    pub product_name: Option<String>,
    pub promotion_code: Option<String>,
}

impl PricingQuery {
    pub fn new(product_type: impl Into<String>) -> Self {
        Self {
            product_type: product_type.into(),
            ..Self::default()
        }
    }
}

/// `ProductType` → `ProductCategory` → `Product` → `Price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub name: String,
    pub categories: Vec<ProductCategory>,
}

impl FromXml for ProductType {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            name: node.attr_string("Name"),
            categories: node.list("ProductCategory")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub name: String,
    pub products: Vec<Product>,
}

impl FromXml for ProductCategory {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            name: node.attr_string("Name"),
            products: node.list("Product")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub prices: Vec<Price>,
}

impl FromXml for Product {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            name: node.attr_string("Name"),
            prices: node.list("Price")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub duration: u32,
    /// `YEAR`, `MONTH`.
    pub duration_type: String,
    pub price: f64,
    pub regular_price: f64,
    pub your_price: f64,
    pub coupon_price: f64,
    pub currency: String,
}

impl FromXml for Price {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            duration: node.attr_num("Duration")?,
            duration_type: node.attr_string("DurationType"),
            price: node.attr_num("Price")?,
            regular_price: node.attr_num("RegularPrice")?,
            your_price: node.attr_num("YourPrice")?,
            coupon_price: node.attr_num("CouponPrice")?,
            currency: node.attr_string("Currency"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    pub currency: String,
    pub available_balance: f64,
    pub account_balance: f64,
    pub earned_amount: f64,
    pub withdrawable_amount: f64,
    pub funds_required_for_auto_renew: f64,
}

impl FromXml for Balances {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            currency: node.attr_string("Currency"),
            available_balance: node.attr_num("AvailableBalance")?,
            account_balance: node.attr_num("AccountBalance")?,
            earned_amount: node.attr_num("EarnedAmount")?,
            withdrawable_amount: node.attr_num("WithdrawableAmount")?,
            funds_required_for_auto_renew: node.attr_num("FundsRequiredForAutoRenew")?,
        })
    }
}
