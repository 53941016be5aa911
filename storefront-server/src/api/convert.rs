//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use shared::models as api;

// ============ Helper ============

pub fn thing_to_string(thing: &surrealdb::sql::Thing) -> String {
    thing.to_string()
}

pub fn option_thing_to_string(thing: &Option<surrealdb::sql::Thing>) -> Option<String> {
    thing.as_ref().map(thing_to_string)
}

// ============ Category ============

impl From<db::Category> for api::Category {
    fn from(c: db::Category) -> Self {
        Self {
            id: option_thing_to_string(&c.id),
            name: c.name,
            order: c.sort_order,
        }
    }
}

// ============ MenuItem ============

impl From<db::MenuItem> for api::MenuItem {
    fn from(m: db::MenuItem) -> Self {
        Self {
            id: option_thing_to_string(&m.id),
            category_id: thing_to_string(&m.category),
            name: m.name,
            description: m.description,
            price: m.price,
            image_url: m.image_url,
            is_available: m.is_available,
            is_hidden: m.is_hidden,
        }
    }
}

// ============ Banner ============

impl From<db::Banner> for api::Banner {
    fn from(b: db::Banner) -> Self {
        Self {
            id: option_thing_to_string(&b.id),
            image_url: b.image_url,
            order: b.sort_order,
            is_active: b.is_active,
        }
    }
}

// ============ Settings ============

impl From<db::Settings> for api::Settings {
    fn from(s: db::Settings) -> Self {
        Self {
            id: option_thing_to_string(&s.id),
            whatsapp_number: s.whatsapp_number,
            restaurant_name: s.restaurant_name,
            currency: s.currency,
            logo_url: s.logo_url,
            footer_text: s.footer_text,
            phone: s.phone,
            email: s.email,
            address: s.address,
            address_link: s.address_link,
        }
    }
}
