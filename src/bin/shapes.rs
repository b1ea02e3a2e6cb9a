//! Interactive shape collection: insert, erase, print, count by area.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use figura::{DynamicArray, Rhombus};

/// Whitespace token stream over buffered input, the way `cin >>` reads.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Tokens<R> {
        Tokens { input, pending: VecDeque::new() }
    }

    fn next(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self.input.read_line(&mut line).ok()?;
            if read == 0 {
                return None;
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front()
    }

    fn next_position(&mut self) -> Option<usize> {
        let token = self.next()?;
        match token.parse() {
            Ok(position) => Some(position),
            Err(_) => {
                eprintln!("Not a position: {:?}", token);
                None
            }
        }
    }

    /// The next `count` tokens joined with spaces, or `None` on EOF.
    fn take_line(&mut self, count: usize) -> Option<String> {
        let mut taken = Vec::with_capacity(count);
        for _ in 0..count {
            taken.push(self.next()?);
        }
        Some(taken.join(" "))
    }
}

fn run(tokens: &mut Tokens<impl BufRead>, shapes: &mut DynamicArray<Rhombus>) {
    while let Some(option) = tokens.next() {
        match option.as_str() {
            "1" => {
                let position = match tokens.next_position() {
                    Some(p) => p,
                    None => continue,
                };
                println!("Enter rhombus (center and two adjacent vertices):");
                let raw = match tokens.take_line(6) {
                    Some(raw) => raw,
                    None => return,
                };
                let rhombus: Rhombus = match raw.parse() {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };
                if let Err(e) = shapes.insert(shapes.cursor(position), rhombus) {
                    eprintln!("{}", e);
                }
            }
            "2" => {
                let position = match tokens.next_position() {
                    Some(p) => p,
                    None => continue,
                };
                if let Err(e) = shapes.erase(shapes.cursor(position)) {
                    eprintln!("{}", e);
                }
            }
            "3" => {
                for shape in shapes.iter() {
                    println!("{}\n\tArea: {}", shape, shape.area());
                }
            }
            "4" => {
                let limit: f64 = match tokens.next().and_then(|t| t.parse().ok()) {
                    Some(limit) => limit,
                    None => {
                        eprintln!("Not an area limit");
                        continue;
                    }
                };
                let total = shapes.iter().filter(|shape| shape.area() < limit).count();
                println!("Total: {}", total);
            }
            _ => println!("I don't know that command!"),
        }
    }
}

fn main() {
    env_logger::init();

    println!("1: insert <x>\n2: erase <x>\n3: print\n4: count area <x>");

    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    let mut shapes: DynamicArray<Rhombus> = DynamicArray::new();
    run(&mut tokens, &mut shapes);
}
