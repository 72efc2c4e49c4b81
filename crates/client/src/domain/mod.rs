pub mod a001_brand;
pub mod a002_product;
pub mod a003_grocery;
pub mod a004_order;
pub mod a005_taxi_driver;
pub mod a006_taxi_vehicle;
pub mod a007_taxi_ride;
pub mod a008_warehouse;
pub mod a009_restaurant;
pub mod a010_restaurant_category;
pub mod a011_dish;
pub mod a012_room;
pub mod a013_amenity;
