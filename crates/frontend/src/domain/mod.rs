pub mod ventas;
