pub mod azzera;
pub mod gioca;
pub mod mostra;
