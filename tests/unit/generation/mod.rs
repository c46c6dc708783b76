mod traits;
mod transform;
