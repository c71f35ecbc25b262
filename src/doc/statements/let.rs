/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. If the expression fails the variable keeps
its previous value.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A * 2
40 PRINT A
RUN
10
20
```

*/
