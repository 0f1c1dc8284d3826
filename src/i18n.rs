//! User-facing text in English and Spanish.
//!
//! Every line the program prints is a [`Message`] rendered for the active
//! [`Language`].

use crate::exercises::Exercise;
use crate::games::tictactoe::Player;
use crate::survey::SurveyRecord;
use serde::{Deserialize, Serialize};

/// Language of prompts and output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    #[value(name = "en", alias = "english")]
    #[serde(alias = "en")]
    English,
    /// Spanish.
    #[value(name = "es", alias = "spanish")]
    #[serde(alias = "es")]
    Spanish,
}

impl Language {
    /// Chooses the variant written for this language.
    pub fn pick<T>(self, english: T, spanish: T) -> T {
        match self {
            Language::English => english,
            Language::Spanish => spanish,
        }
    }
}

/// A line (or block) of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<'a> {
    // Input validation
    /// Text did not parse as an integer.
    NotAnInteger,
    /// Whole number too large to hold.
    OutOfRange,
    /// Value below the accepted minimum.
    BelowMinimum(i64),
    /// Value above the accepted maximum.
    AboveMaximum(i64),

    // Top menu
    /// Menu banner.
    MenuHeader,
    /// One numbered exercise entry.
    MenuEntry(Exercise),
    /// The exit entry.
    MenuExit,
    /// Menu closing rule.
    MenuFooter,
    /// Prompt for the exercise number.
    ChooseExercise,
    /// Farewell on exit.
    Goodbye,

    // Exercise 1
    /// Heading for the sequential matrix.
    SequentialTitle,

    // Exercise 2
    /// Prompt for the column count of the 5 x n matrix.
    ColumnCountPrompt,
    /// Heading for the 5 x n matrix.
    FiveByNTitle,

    // Exercise 3
    /// Prompt for the side of both square matrices.
    SquareSizePrompt,
    /// Heading for matrix A.
    MatrixA,
    /// Heading for matrix B.
    MatrixB,
    /// Heading for A + B.
    MatrixSum,

    // Exercise 4
    /// Operations menu (several lines).
    OperationsMenu,
    /// Prompt for an operation.
    ChooseOption,
    /// Heading after a fill.
    MatrixFilled,
    /// Rejection of a reduction before the first fill.
    FillFirst,
    /// Prompt for a row index up to the given maximum.
    RowIndexPrompt(usize),
    /// Prompt for a column index up to the given maximum.
    ColumnIndexPrompt(usize),
    /// Row sum result.
    RowSum {
        /// Row index.
        row: usize,
        /// Sum.
        sum: i64,
    },
    /// Column sum result.
    ColumnSum {
        /// Column index.
        column: usize,
        /// Sum.
        sum: i64,
    },
    /// Main diagonal sum.
    MainDiagonalSum(i64),
    /// Anti-diagonal sum.
    AntiDiagonalSum(i64),
    /// Mean of all cells, three decimals.
    MatrixMean(f64),

    // Exercise 5
    /// Heading for the shuffled matrix.
    PermutationTitle,

    // Exercise 6
    /// Prompt for a row count.
    RowCountPrompt,
    /// Prompt for a column count.
    ColumnCountPlainPrompt,
    /// Heading for a generated matrix.
    GeneratedMatrix,
    /// A randomly chosen row and its sum.
    RandomRowPick {
        /// Row index.
        row: usize,
        /// Sum.
        sum: i64,
    },
    /// A randomly chosen column and its sum.
    RandomColumnPick {
        /// Column index.
        column: usize,
        /// Sum.
        sum: i64,
    },

    // Exercise 7
    /// Whose turn it is.
    PlayerTurn(Player),
    /// Prompt for a board row.
    BoardRowPrompt,
    /// Prompt for a board column.
    BoardColumnPrompt,
    /// Square already taken.
    SquareOccupied,
    /// Winner announcement.
    PlayerWins(Player),
    /// Full board with no winner.
    Tie,

    // Exercise 8
    /// Raw survey records as code tuples.
    SurveyData(&'a [SurveyRecord]),
    /// Share of males.
    MalePercentage(f64),
    /// Share of females.
    FemalePercentage(f64),
    /// Share of respondents who are working males.
    EmployedMalePercentage(f64),
    /// Share of respondents who are working females.
    EmployedFemalePercentage(f64),
    /// Mean salary of working males.
    MaleAverageSalary(f64),
    /// Mean salary of working females.
    FemaleAverageSalary(f64),

    // Exercise 9
    /// Heading for the random 5x5 matrix.
    OriginalFiveByFive,
    /// Mean of all cells, three decimals.
    MatrixAverage(f64),
    /// Maximum and how often it appears.
    MaximumRepeats {
        /// Largest value.
        value: i64,
        /// Occurrences.
        count: usize,
    },
    /// Even values with their count.
    EvenNumbers(&'a [i64]),
    /// Sum of the last row.
    LastRowSum(i64),
    /// Heading for the sorted matrix.
    SortedMatrix,

    // Exercise 10
    /// Instructions for the manual matrix.
    EnterCells {
        /// Row count.
        rows: usize,
        /// Column count.
        columns: usize,
    },
    /// Prompt for one cell.
    ElementPrompt {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },
    /// Heading for the typed matrix.
    ReadMatrix,
    /// Maximum with every position.
    MaximumAt {
        /// Largest value.
        value: i64,
        /// Row-major positions.
        positions: &'a [(usize, usize)],
    },
    /// Minimum with every position.
    MinimumAt {
        /// Smallest value.
        value: i64,
        /// Row-major positions.
        positions: &'a [(usize, usize)],
    },

    // Exercise 11
    /// Prompt for the jagged row count.
    JaggedRowCountPrompt,
    /// Prompt for one row's length.
    JaggedColumnCountPrompt(usize),
    /// Heading for the jagged matrix.
    JaggedTitle,
    /// One jagged row with its length.
    JaggedRow {
        /// Row index.
        index: usize,
        /// Cells.
        values: &'a [i64],
    },
}

impl Message<'_> {
    /// Renders the message text for `language`.
    pub fn render(&self, language: Language) -> String {
        let l = language;
        match *self {
            Message::NotAnInteger => l
                .pick(
                    "Invalid input. You must enter a whole number.",
                    "Entrada inválida. Debes ingresar un número entero.",
                )
                .to_string(),
            Message::OutOfRange => l
                .pick(
                    "The number is too large. Enter a smaller whole number.",
                    "El número es demasiado grande. Ingresa un entero más pequeño.",
                )
                .to_string(),
            Message::BelowMinimum(min) => l.pick(
                format!("The value must be >= {min}."),
                format!("El valor debe ser >= {min}."),
            ),
            Message::AboveMaximum(max) => l.pick(
                format!("The value must be <= {max}."),
                format!("El valor debe ser <= {max}."),
            ),

            Message::MenuHeader => l
                .pick(
                    "\n======= MATRIX EXERCISES MENU =======",
                    "\n======= MENÚ DE EJERCICIOS DE MATRICES =======",
                )
                .to_string(),
            Message::MenuEntry(exercise) => {
                let n = exercise.number();
                let title = exercise.title(l);
                l.pick(
                    format!("{n}. Exercise {n}: {title}"),
                    format!("{n}. Ejercicio {n}: {title}"),
                )
            }
            Message::MenuExit => l.pick("0. Exit", "0. Salir").to_string(),
            Message::MenuFooter => l
                .pick(
                    "======================================",
                    "==============================================",
                )
                .to_string(),
            Message::ChooseExercise => l
                .pick("Choose an exercise (0-11): ", "Elige un ejercicio (0-11): ")
                .to_string(),
            Message::Goodbye => l
                .pick(
                    "Exiting program... Goodbye!",
                    "Saliendo del programa... ¡Hasta luego!",
                )
                .to_string(),

            Message::SequentialTitle => l
                .pick(
                    "3x3 matrix with numbers from 1 to 9:",
                    "Matriz 3x3 con números del 1 al 9:",
                )
                .to_string(),

            Message::ColumnCountPrompt => l
                .pick("Number of columns (n): ", "Número de columnas (n): ")
                .to_string(),
            Message::FiveByNTitle => l
                .pick(
                    "5 x n matrix with random numbers between 0 and 10:",
                    "Matriz 5 x n con aleatorios entre 0 y 10:",
                )
                .to_string(),

            Message::SquareSizePrompt => l
                .pick(
                    "Size n for n x n matrices: ",
                    "Tamaño n para matrices n x n: ",
                )
                .to_string(),
            Message::MatrixA => l.pick("Matrix A:", "Matriz A:").to_string(),
            Message::MatrixB => l.pick("Matrix B:", "Matriz B:").to_string(),
            Message::MatrixSum => l.pick("Sum C = A + B:", "Suma C = A + B:").to_string(),

            Message::OperationsMenu => l
                .pick(
                    [
                        "Menu (4x4 matrix):",
                        "1. Fill ENTIRE matrix with random numbers",
                        "2. Sum a row",
                        "3. Sum a column",
                        "4. Sum main diagonal",
                        "5. Sum secondary diagonal",
                        "6. Average of all values",
                        "0. Exit",
                    ],
                    [
                        "Menú (matriz 4x4):",
                        "1. Rellenar TODA la matriz con aleatorios",
                        "2. Sumar una fila",
                        "3. Sumar una columna",
                        "4. Sumar diagonal principal",
                        "5. Sumar diagonal inversa",
                        "6. Media de todos los valores",
                        "0. Salir",
                    ],
                )
                .join("\n"),
            Message::ChooseOption => l
                .pick("Choose an option: ", "Elige una opción: ")
                .to_string(),
            Message::MatrixFilled => l.pick("Matrix filled:", "Matriz rellenada:").to_string(),
            Message::FillFirst => l
                .pick(
                    "You must fill the matrix first (option 1).",
                    "Debes rellenar la matriz primero (opción 1).",
                )
                .to_string(),
            Message::RowIndexPrompt(max) => l.pick(
                format!("Row index [0..{max}]: "),
                format!("Índice de fila [0..{max}]: "),
            ),
            Message::ColumnIndexPrompt(max) => l.pick(
                format!("Column index [0..{max}]: "),
                format!("Índice de columna [0..{max}]: "),
            ),
            Message::RowSum { row, sum } => l.pick(
                format!("Sum of row {row}: {sum}"),
                format!("Suma de la fila {row}: {sum}"),
            ),
            Message::ColumnSum { column, sum } => l.pick(
                format!("Sum of column {column}: {sum}"),
                format!("Suma de la columna {column}: {sum}"),
            ),
            Message::MainDiagonalSum(sum) => l.pick(
                format!("Main diagonal sum: {sum}"),
                format!("Suma diagonal principal: {sum}"),
            ),
            Message::AntiDiagonalSum(sum) => l.pick(
                format!("Secondary diagonal sum: {sum}"),
                format!("Suma diagonal inversa: {sum}"),
            ),
            Message::MatrixMean(mean) => l.pick(
                format!("Matrix average: {mean:.3}"),
                format!("Media de la matriz: {mean:.3}"),
            ),

            Message::PermutationTitle => l
                .pick("3x3 matrix without repeats:", "Matriz 3x3 sin repetidos:")
                .to_string(),

            Message::RowCountPrompt => l
                .pick("Number of rows: ", "Número de filas: ")
                .to_string(),
            Message::ColumnCountPlainPrompt => l
                .pick("Number of columns: ", "Número de columnas: ")
                .to_string(),
            Message::GeneratedMatrix => l.pick("Generated matrix:", "Matriz generada:").to_string(),
            Message::RandomRowPick { row, sum } => l.pick(
                format!("RANDOMLY chose ROW {row}. Sum = {sum}"),
                format!("Se eligió ALEATORIAMENTE la FILA {row}. Suma = {sum}"),
            ),
            Message::RandomColumnPick { column, sum } => l.pick(
                format!("RANDOMLY chose COLUMN {column}. Sum = {sum}"),
                format!("Se eligió ALEATORIAMENTE la COLUMNA {column}. Suma = {sum}"),
            ),

            Message::PlayerTurn(player) => l.pick(
                format!("Player {player}'s turn:"),
                format!("Turno del jugador {player}:"),
            ),
            Message::BoardRowPrompt => l.pick("Row [0..2]: ", "Fila [0..2]: ").to_string(),
            Message::BoardColumnPrompt => {
                l.pick("Column [0..2]: ", "Columna [0..2]: ").to_string()
            }
            Message::SquareOccupied => l
                .pick(
                    "Position occupied. Choose another.",
                    "Posición ocupada. Elige otra.",
                )
                .to_string(),
            Message::PlayerWins(player) => {
                l.pick(format!("{player} wins!"), format!("¡Gana {player}!"))
            }
            Message::Tie => l
                .pick("Tie: no more positions.", "Empate: no hay más posiciones.")
                .to_string(),

            Message::SurveyData(records) => {
                let codes: Vec<_> = records.iter().map(SurveyRecord::codes).collect();
                l.pick(
                    format!("Generated data (gender, works, salary):\n{codes:?}"),
                    format!("Datos generados (sexo, trabaja, sueldo):\n{codes:?}"),
                )
            }
            Message::MalePercentage(pct) => l.pick(
                format!("Percentage of males: {pct:.1}%"),
                format!("Porcentaje de hombres: {pct:.1}%"),
            ),
            Message::FemalePercentage(pct) => l.pick(
                format!("Percentage of females: {pct:.1}%"),
                format!("Porcentaje de mujeres: {pct:.1}%"),
            ),
            Message::EmployedMalePercentage(pct) => l.pick(
                format!("Percentage of males who work: {pct:.1}%"),
                format!("Porcentaje de hombres que trabajan: {pct:.1}%"),
            ),
            Message::EmployedFemalePercentage(pct) => l.pick(
                format!("Percentage of females who work: {pct:.1}%"),
                format!("Porcentaje de mujeres que trabajan: {pct:.1}%"),
            ),
            Message::MaleAverageSalary(avg) => l.pick(
                format!("Average salary of males who work: {avg:.2}"),
                format!("Sueldo promedio de hombres que trabajan: {avg:.2}"),
            ),
            Message::FemaleAverageSalary(avg) => l.pick(
                format!("Average salary of females who work: {avg:.2}"),
                format!("Sueldo promedio de mujeres que trabajan: {avg:.2}"),
            ),

            Message::OriginalFiveByFive => l
                .pick("Original 5x5 matrix:", "Matriz original 5x5:")
                .to_string(),
            Message::MatrixAverage(mean) => l.pick(
                format!("Matrix average: {mean:.3}"),
                format!("Promedio de la matriz: {mean:.3}"),
            ),
            Message::MaximumRepeats { value, count } => l.pick(
                format!("Maximum number: {value}, appears {count} times"),
                format!("Número mayor: {value}, se repite {count} veces"),
            ),
            Message::EvenNumbers(values) => {
                let count = values.len();
                l.pick(
                    format!("Even numbers ({count}): {values:?}"),
                    format!("Números pares ({count}): {values:?}"),
                )
            }
            Message::LastRowSum(sum) => l.pick(
                format!("Sum of last row: {sum}"),
                format!("Suma de la última fila: {sum}"),
            ),
            Message::SortedMatrix => l
                .pick(
                    "Matrix sorted in ascending order:",
                    "Matriz ordenada ascendentemente:",
                )
                .to_string(),

            Message::EnterCells { rows, columns } => {
                let total = rows * columns;
                l.pick(
                    format!("Enter {total} integers for a {rows}x{columns} matrix:"),
                    format!("Introduce {total} enteros para una matriz {rows}x{columns}:"),
                )
            }
            Message::ElementPrompt { row, column } => l.pick(
                format!("Element [{row},{column}]: "),
                format!("Elemento [{row},{column}]: "),
            ),
            Message::ReadMatrix => l.pick("Read matrix:", "Matriz leída:").to_string(),
            Message::MaximumAt { value, positions } => l.pick(
                format!("Maximum: {value}, positions: {positions:?}"),
                format!("Mayor: {value}, posiciones: {positions:?}"),
            ),
            Message::MinimumAt { value, positions } => l.pick(
                format!("Minimum: {value}, positions: {positions:?}"),
                format!("Menor: {value}, posiciones: {positions:?}"),
            ),

            Message::JaggedRowCountPrompt => l
                .pick("Number of rows (>=2): ", "Número de filas (>=2): ")
                .to_string(),
            Message::JaggedColumnCountPrompt(row) => l.pick(
                format!("Number of columns in row {row} (>=1): "),
                format!("Número de columnas en fila {row} (>=1): "),
            ),
            Message::JaggedTitle => l
                .pick("Generated irregular matrix:", "Matriz irregular generada:")
                .to_string(),
            Message::JaggedRow { index, values } => {
                let len = values.len();
                l.pick(
                    format!("Row {index} ({len} col): {values:?}"),
                    format!("Fila {index} ({len} col): {values:?}"),
                )
            }
        }
    }
}
