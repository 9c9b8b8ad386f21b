pub mod style_contract;
