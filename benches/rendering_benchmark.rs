#![feature(test)]

extern crate life;
extern crate test;

use life::data::*;
use life::rendering::*;
use std::io;
use test::Bencher;

#[bench]
fn show_50x20_grid_10times(b: &mut Bencher) {
    let mut grid = Grid::with_dimensions(50, 20, 10);
    grid.randomize(0.5);
    let mut console = Console::new(io::sink(), true);
    b.iter(|| {
        for _ in 0..10 {
            console.show(&grid).unwrap()
        }
    })
}

#[bench]
fn show_500x500_grid_10times(b: &mut Bencher) {
    let mut grid = Grid::with_dimensions(500, 500, 1);
    grid.randomize(0.5);
    let mut console = Console::new(io::sink(), false);
    b.iter(|| {
        for _ in 0..10 {
            console.show(&grid).unwrap()
        }
    })
}
