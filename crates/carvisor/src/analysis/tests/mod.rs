mod common;
mod damage;
mod health;
