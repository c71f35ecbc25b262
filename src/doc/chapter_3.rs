/*!
# Commands

Commands are typed without a line number and cannot be stored in a
program. Nothing may follow the command word.
*/

pub mod CLEAR {
    /*!
    ## `CLEAR` Erases the program and all variables.
    ```text
    10 PRINT 1
    LET A = 2
    CLEAR
    LIST
    PRINT A
    VARIABLE NOT DEFINED
    ```
    */
}

pub mod HELP {
    /*!
    ## `HELP` Prints a summary of commands and statements.
    */
}

pub mod LIST {
    /*!
    ## `LIST` Prints every program line, in line number order, as typed.
    ```text
    20 PRINT 2
    10 PRINT 1
    LIST
    10 PRINT 1
    20 PRINT 2
    ```
    */
}

pub mod QUIT {
    /*!
    ## `QUIT` Exits the interpreter.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Runs the program from its lowest line number.
    Variables are not cleared; values assigned in direct mode are visible
    to the program. Running an empty program does nothing. Commands are
    never stored, so `10 RUN` is a syntax error rather than a program line.
    ```text
    10 PRINT N
    LET N = 8
    RUN
    8
    ```
    */
}
