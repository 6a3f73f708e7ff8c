pub mod sdk;
#[cfg(feature="system-cake_eating")] pub mod cake_eating;
