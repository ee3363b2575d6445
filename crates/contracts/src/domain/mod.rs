pub mod a001_certificate;
pub mod a002_gallery_image;
pub mod a003_product;
