//! End-to-end tests for the scenarios, driven by scripted input.

use matrix_exercises::exercises::{
    LinePick, Outcome, PanelState, five_by_n, jagged, keyboard_matrix, matrix_statistics,
    matrix_sum, operations_menu, random_line_sum, sequential, survey, unique_values,
};
use matrix_exercises::{Console, DEFAULT_CELL_WIDTH, Language};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::io::Cursor;

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Language::English,
        DEFAULT_CELL_WIDTH,
    )
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}

#[test]
fn test_sequential_prints_one_to_nine() {
    let mut c = console("");
    let matrix = sequential(&mut c).unwrap();
    assert_eq!(matrix.flatten(), (1..=9).collect::<Vec<_>>());
    assert_eq!(
        output(c),
        "3x3 matrix with numbers from 1 to 9:\n   1    2    3\n   4    5    6\n   7    8    9\n\n"
    );
}

#[test]
fn test_five_by_n_reprompts_and_bounds_cells() {
    let mut rng = Pcg64::seed_from_u64(1);
    let mut c = console("0\nfour\n4\n");
    let matrix = five_by_n(&mut c, &mut rng).unwrap();
    assert_eq!(matrix.row_count(), 5);
    assert_eq!(matrix.column_count(), 4);
    assert!(matrix.cells().all(|v| (0..=10).contains(&v)));

    let out = output(c);
    assert!(out.contains("The value must be >= 1."));
    assert!(out.contains("Invalid input. You must enter a whole number."));
    assert!(out.contains("5 x n matrix with random numbers between 0 and 10:"));
}

#[test]
fn test_matrix_sum_is_element_wise() {
    let mut rng = Pcg64::seed_from_u64(2);
    let mut c = console("3\n");
    let summation = matrix_sum(&mut c, &mut rng).unwrap();
    let (a, b, total) = (summation.left(), summation.right(), summation.total());
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(
                total.get(i, j).unwrap(),
                a.get(i, j).unwrap() + b.get(i, j).unwrap()
            );
        }
    }
    let out = output(c);
    let a_at = out.find("Matrix A:").unwrap();
    let b_at = out.find("Matrix B:").unwrap();
    let c_at = out.find("Sum C = A + B:").unwrap();
    assert!(a_at < b_at && b_at < c_at);
}

#[test]
fn test_operations_menu_requires_fill_first() {
    let mut rng = Pcg64::seed_from_u64(3);
    // Row sum before fill, fill, column 1, main diagonal, anti-diagonal, mean, exit.
    let mut c = console("2\n1\n3\n1\n4\n5\n6\n0\n");
    let panel = operations_menu(&mut c, &mut rng).unwrap();

    let PanelState::Filled(matrix) = panel.state() else {
        panic!("panel should be filled");
    };
    let out = output(c);
    assert_eq!(out.matches("You must fill the matrix first (option 1).").count(), 1);
    assert!(!out.contains("Row index"));
    assert!(out.contains("Matrix filled:"));
    assert!(out.contains(&format!(
        "Sum of column 1: {}",
        matrix.column_sum(1).unwrap()
    )));
    assert!(out.contains(&format!(
        "Main diagonal sum: {}",
        matrix.main_diagonal_sum().unwrap()
    )));
    assert!(out.contains(&format!(
        "Secondary diagonal sum: {}",
        matrix.anti_diagonal_sum().unwrap()
    )));
    assert!(out.contains(&format!("Matrix average: {:.3}", matrix.mean())));
}

#[test]
fn test_operations_menu_exit_while_empty() {
    let mut rng = Pcg64::seed_from_u64(3);
    let mut c = console("6\n4\n0\n");
    let panel = operations_menu(&mut c, &mut rng).unwrap();
    assert_eq!(panel.state(), &PanelState::Empty);
    assert_eq!(
        output(c)
            .matches("You must fill the matrix first (option 1).")
            .count(),
        2
    );
}

#[test]
fn test_operations_outcome_messages() {
    assert!(Outcome::Filled.message().is_none());
    assert!(Outcome::Mean(1.5).message().is_some());
}

#[test]
fn test_unique_values_is_permutation() {
    let mut rng = Pcg64::seed_from_u64(4);
    for _ in 0..25 {
        let mut c = console("");
        let mut values = unique_values(&mut c, &mut rng).unwrap().flatten();
        values.sort_unstable();
        assert_eq!(values, (1..=9).collect::<Vec<_>>());
    }
}

#[test]
fn test_random_line_sum_reports_pick() {
    let mut rng = Pcg64::seed_from_u64(5);
    let mut c = console("2\n3\n");
    let (matrix, pick) = random_line_sum(&mut c, &mut rng).unwrap();
    assert_eq!((matrix.row_count(), matrix.column_count()), (2, 3));
    assert!(matrix.cells().all(|v| (0..=9).contains(&v)));

    let out = output(c);
    match pick {
        LinePick::Row { index, sum } => {
            assert!(out.contains(&format!("RANDOMLY chose ROW {index}. Sum = {sum}")))
        }
        LinePick::Column { index, sum } => {
            assert!(out.contains(&format!("RANDOMLY chose COLUMN {index}. Sum = {sum}")))
        }
    }
}

#[test]
fn test_survey_percentages() {
    let mut rng = Pcg64::seed_from_u64(6);
    let mut c = console("");
    let summary = survey(&mut c, &mut rng).unwrap();
    assert_eq!(*summary.respondents(), 10);
    assert!((summary.male_percentage() + summary.female_percentage() - 100.0).abs() < 1e-9);

    let out = output(c);
    assert!(out.starts_with("Generated data (gender, works, salary):\n[("));
    assert!(out.contains("Average salary of females who work: "));
}

#[test]
fn test_matrix_statistics_sorted_is_permutation() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut c = console("");
    let report = matrix_statistics(&mut c, &mut rng).unwrap();

    let mut original = report.matrix().flatten();
    let sorted = report.sorted().flatten();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    original.sort();
    assert_eq!(original, sorted);
    assert_eq!(report.sorted().row_count(), 5);
    assert_eq!(report.sorted().column_count(), 5);
    assert!(report.evens().iter().all(|v| v % 2 == 0));

    let out = output(c);
    assert!(out.contains(&format!(
        "Maximum number: {}, appears {} times",
        report.maximum(),
        report.maximum_count()
    )));
    assert!(out.contains("Matrix sorted in ascending order:"));
}

#[test]
fn test_keyboard_matrix_extremes() {
    let cells = [5, -3, 7, 7, 0, 2, 7, -3, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3];
    let mut input = String::from("x\n");
    for cell in cells {
        input.push_str(&format!("{cell}\n"));
    }
    let mut c = console(&input);
    let matrix = keyboard_matrix(&mut c).unwrap();
    assert_eq!(matrix.flatten(), cells.to_vec());

    let out = output(c);
    assert!(out.contains("Enter 20 integers for a 5x4 matrix:"));
    assert!(out.contains("Element [4,3]: "));
    assert!(out.contains("Invalid input. You must enter a whole number."));
    assert!(out.contains("Maximum: 7, positions: [(0, 2), (0, 3), (1, 2)]"));
    assert!(out.contains("Minimum: -3, positions: [(0, 1), (1, 3)]"));
}

#[test]
fn test_jagged_rows_keep_their_lengths() {
    let mut rng = Pcg64::seed_from_u64(8);
    let mut c = console("1\n2\n3\n0\n1\n");
    let matrix = jagged(&mut c, &mut rng).unwrap();
    assert_eq!(matrix.row_lengths(), vec![3, 1]);
    assert!(matrix.rows().iter().flatten().all(|v| (1..=5).contains(v)));

    let out = output(c);
    assert!(out.contains("The value must be >= 2."));
    assert!(out.contains("The value must be >= 1."));
    assert!(out.contains("Row 0 (3 col): ["));
    assert!(out.contains("Row 1 (1 col): ["));
}

#[test]
fn test_jagged_huge_row_count_keeps_prompting() {
    let mut rng = Pcg64::seed_from_u64(10);
    let mut c = console("2305843009213693952\n1\n");
    let err = jagged(&mut c, &mut rng).unwrap_err();
    assert!(err.is_input_closed());
    let out = output(c);
    assert!(out.contains("Number of columns in row 0 (>=1): "));
    assert!(out.contains("Number of columns in row 1 (>=1): "));
}

#[test]
fn test_input_closed_mid_exercise() {
    let mut rng = Pcg64::seed_from_u64(9);
    let mut c = console("");
    let err = five_by_n(&mut c, &mut rng).unwrap_err();
    assert!(err.is_input_closed());
}
