/*!
# `REM <anything>`

## Purpose
A remark. Everything after `REM` is ignored when the program runs.

## Remarks
Only allowed in program lines.

## Example
```text
10 REM THIS PROGRAM PRINTS 1
20 PRINT 1
```

*/
