mod employee;
mod movement;
mod unit;
