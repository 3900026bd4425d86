// Simba Engine — wallet behaviour on top of the atoms layer.

pub mod evm;
