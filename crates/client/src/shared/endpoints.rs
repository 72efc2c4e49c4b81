//! Endpoint map: every backend path the panel talks to, in one place.
//!
//! The backend grew in eras and the path styles show it: the oldest admin
//! modules (brands, groceries) use verb paths like `get_all_brand`, newer
//! resources are RESTful with action sub-paths. Callers never format paths
//! themselves.

// ========================================
// AUTH (PUBLIC)
// ========================================
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_ME: &str = "/api/auth/me";

// ========================================
// SYSTEM: USERS / STAFF / PERMISSIONS
// ========================================
pub const USERS: &str = "/api/system/users";

pub fn user_by_id(id: &str) -> String {
    format!("/api/system/users/{}", id)
}

pub fn user_change_password(id: &str) -> String {
    format!("/api/system/users/{}/change-password", id)
}

pub const STAFF: &str = "/api/system/staff";

pub fn staff_by_id(id: &str) -> String {
    format!("/api/system/staff/{}", id)
}

pub fn staff_assign_warehouse(id: &str) -> String {
    format!("/api/system/staff/{}/assign-warehouse", id)
}

pub const PERMISSIONS: &str = "/api/system/permissions";

pub fn permission_by_id(id: &str) -> String {
    format!("/api/system/permissions/{}", id)
}

// ========================================
// BRANDS (legacy admin verbs)
// ========================================
pub const GET_ALL_BRAND: &str = "/api/admin/get_all_brand";
pub const CREATE_BRAND: &str = "/api/admin/create_brand";

pub fn get_brand(id: &str) -> String {
    format!("/api/admin/get_brand/{}", id)
}

pub fn update_brand(id: &str) -> String {
    format!("/api/admin/update_brand/{}", id)
}

pub fn delete_brand(id: &str) -> String {
    format!("/api/admin/delete_brand/{}", id)
}

pub fn brand_toggle_status(id: &str) -> String {
    format!("/api/admin/brand/{}/toggle-status", id)
}

pub fn brand_set_default(id: &str) -> String {
    format!("/api/admin/brand/{}/set-default", id)
}

// ========================================
// GROCERIES (legacy admin verbs)
// ========================================
pub const GET_ALL_GROCERY: &str = "/api/admin/get_all_grocery";
pub const CREATE_GROCERY: &str = "/api/admin/create_grocery";

pub fn get_grocery(id: &str) -> String {
    format!("/api/admin/get_grocery/{}", id)
}

pub fn update_grocery(id: &str) -> String {
    format!("/api/admin/update_grocery/{}", id)
}

pub fn delete_grocery(id: &str) -> String {
    format!("/api/admin/delete_grocery/{}", id)
}

pub fn grocery_toggle_status(id: &str) -> String {
    format!("/api/admin/grocery/{}/toggle-status", id)
}

// ========================================
// PRODUCTS
// ========================================
pub const PRODUCTS: &str = "/api/products";
pub const PRODUCTS_BULK_DELETE: &str = "/api/products/bulk-delete";
pub const PRODUCTS_EXPORT: &str = "/api/products/export";

pub fn product_by_id(id: &str) -> String {
    format!("/api/products/{}", id)
}

pub fn product_toggle_status(id: &str) -> String {
    format!("/api/products/{}/toggle-status", id)
}

// ========================================
// ORDERS
// ========================================
pub const ORDERS: &str = "/api/orders";
pub const ORDERS_BULK_DELETE: &str = "/api/orders/bulk-delete";

pub fn order_by_id(id: &str) -> String {
    format!("/api/orders/{}", id)
}

pub fn order_status(id: &str) -> String {
    format!("/api/orders/{}/status", id)
}

pub fn order_cancel(id: &str) -> String {
    format!("/api/orders/{}/cancel", id)
}

// ========================================
// TAXI: DRIVERS / VEHICLES / RIDES
// ========================================
pub const TAXI_DRIVERS: &str = "/api/taxi/drivers";
pub const TAXI_VEHICLES: &str = "/api/taxi/vehicles";
pub const TAXI_RIDES: &str = "/api/taxi/rides";

pub fn taxi_driver_by_id(id: &str) -> String {
    format!("/api/taxi/drivers/{}", id)
}

pub fn taxi_driver_toggle_status(id: &str) -> String {
    format!("/api/taxi/drivers/{}/toggle-status", id)
}

pub fn taxi_vehicle_by_id(id: &str) -> String {
    format!("/api/taxi/vehicles/{}", id)
}

pub fn taxi_vehicle_assign_driver(id: &str) -> String {
    format!("/api/taxi/vehicles/{}/assign-driver", id)
}

pub fn taxi_ride_by_id(id: &str) -> String {
    format!("/api/taxi/rides/{}", id)
}

pub fn taxi_ride_cancel(id: &str) -> String {
    format!("/api/taxi/rides/{}/cancel", id)
}

pub fn taxi_ride_assign(id: &str) -> String {
    format!("/api/taxi/rides/{}/assign", id)
}

// ========================================
// WAREHOUSES
// ========================================
pub const WAREHOUSES: &str = "/api/warehouses";

pub fn warehouse_by_id(id: &str) -> String {
    format!("/api/warehouses/{}", id)
}

pub fn warehouse_toggle_status(id: &str) -> String {
    format!("/api/warehouses/{}/toggle-status", id)
}

// ========================================
// RESTAURANTS / CATEGORIES / DISHES
// ========================================
pub const RESTAURANTS: &str = "/api/restaurants";
pub const RESTAURANT_CATEGORIES: &str = "/api/restaurant-categories";
pub const DISHES: &str = "/api/dishes";

pub fn restaurant_by_id(id: &str) -> String {
    format!("/api/restaurants/{}", id)
}

pub fn restaurant_toggle_status(id: &str) -> String {
    format!("/api/restaurants/{}/toggle-status", id)
}

pub fn restaurant_category_by_id(id: &str) -> String {
    format!("/api/restaurant-categories/{}", id)
}

pub fn restaurant_category_toggle_status(id: &str) -> String {
    format!("/api/restaurant-categories/{}/toggle-status", id)
}

pub fn dish_by_id(id: &str) -> String {
    format!("/api/dishes/{}", id)
}

pub fn dish_toggle_status(id: &str) -> String {
    format!("/api/dishes/{}/toggle-status", id)
}

// ========================================
// HOTEL ROOMS / AMENITIES
// ========================================
pub const ROOMS: &str = "/api/rooms";
pub const AMENITIES: &str = "/api/amenities";

pub fn hotel_rooms(hotel_id: &str) -> String {
    format!("/api/hotels/{}/rooms", hotel_id)
}

pub fn room_by_id(id: &str) -> String {
    format!("/api/rooms/{}", id)
}

pub fn room_toggle_status(id: &str) -> String {
    format!("/api/rooms/{}/toggle-status", id)
}

pub fn amenity_by_id(id: &str) -> String {
    format!("/api/amenities/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_templates_embed_id() {
        assert_eq!(get_brand("42"), "/api/admin/get_brand/42");
        assert_eq!(order_cancel("o-1"), "/api/orders/o-1/cancel");
        assert_eq!(hotel_rooms("h-7"), "/api/hotels/h-7/rooms");
        assert_eq!(
            user_change_password("u-3"),
            "/api/system/users/u-3/change-password"
        );
    }
}
