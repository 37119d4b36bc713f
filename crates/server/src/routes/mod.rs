pub mod camaras;
