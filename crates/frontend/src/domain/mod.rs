pub mod a001_shopping_item;
