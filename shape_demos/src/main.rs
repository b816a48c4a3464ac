use shape_calculator::*;
use std::env;
use std::io::{self, BufRead};

fn main() {
    let args: Vec<String> = env::args().collect();
    let demo = if args.len() > 1 { &args[1] } else { "polygon" };

    match demo {
        "polygon" => run_polygon_demo(),
        "shapes" => run_shapes_demo(),
        "palindrome" => run_palindrome_demo(),
        "person" => run_person_demo(),
        _ => println!(
            "Unknown demo: {}. Available demos: polygon, shapes, palindrome, person",
            demo
        ),
    }
}

/// Fail-fast policy: precondition violations surface as errors, which the
/// boundary prints as "[ERROR] <message>".
fn run_polygon_demo() {
    let square = Polygon::Square { side: 2.0 };
    print_polygon(&square);

    match square.scale(2.0) {
        Ok(scaled) => print_polygon(&scaled),
        Err(e) => println!("[ERROR] {}", e),
    }

    // Invalid dimensions are only rejected once an operation runs
    let bad = Polygon::RightTriangle {
        base: 0.0,
        height: 4.0,
    };
    match bad.area() {
        Ok(area) => println!("{:?}", area),
        Err(e) => println!("[ERROR] {}", e),
    }
}

fn print_polygon(polygon: &Polygon) {
    match (polygon.area(), polygon.perimeter()) {
        (Ok(area), Ok(perimeter)) => println!(
            "{} | area={:?} | perimeter={:?}",
            polygon.describe(),
            area,
            perimeter
        ),
        (Err(e), _) | (_, Err(e)) => println!("[ERROR] {}", e),
    }
}

/// Sentinel policy: invalid dimensions yield NAN, which the caller must
/// test for before formatting.
fn run_shapes_demo() {
    let shapes = vec![
        Shape::Circle { radius: 3.0 },
        Shape::Rectangle {
            width: 2.0,
            height: 5.0,
        },
        Shape::Triangle {
            base: 3.0,
            height: 4.0,
        },
        Shape::Circle { radius: -1.0 }, // invalid
    ];

    for shape in &shapes {
        let area = shape.area();
        if area.is_nan() {
            println!("{}: area=Invalid parameters", shape.describe());
        } else {
            println!("{}: area={:?}", shape.describe(), area);
        }
    }
}

/// Reads a single line of standard input and reports whether it is a
/// palindrome. End-of-input with no line counts as "not a palindrome".
fn run_palindrome_demo() {
    let mut line = String::new();
    let result = match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_palindrome(line.trim_end_matches(&['\r', '\n'][..])),
    };
    if result {
        println!("Palindrome");
    } else {
        println!("Not Palindrome");
    }
}

fn run_person_demo() {
    let person = Person::new("Tehrani", 25);
    println!(
        "Name: {}, Age: {} -> Adult: {}, Initial: {}",
        person.name,
        person.age,
        person.is_adult(),
        person.initial().unwrap_or('?'),
    );
}
