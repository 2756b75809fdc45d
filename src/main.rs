#[cfg(feature = "csr")]
fn main() {
    clipnote_web::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {}
